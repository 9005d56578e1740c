/// The two integers read from standard input for a GCD run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub a: i64,
    pub b: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Gcd,
    Fruits,
    Echo,
}

/// Which demo program to run. Each path is a fixed sequence of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoPath {
    /// Print the GCD of two integers, then the fruit list.
    #[default]
    GcdThenFruits,
    /// Print the GCD of two integers, then echo a text file.
    GcdThenEcho,
    Gcd,
    Fruits,
    Echo,
}

impl DemoPath {
    pub fn steps(self) -> &'static [StepKind] {
        match self {
            DemoPath::GcdThenFruits => &[StepKind::Gcd, StepKind::Fruits],
            DemoPath::GcdThenEcho => &[StepKind::Gcd, StepKind::Echo],
            DemoPath::Gcd => &[StepKind::Gcd],
            DemoPath::Fruits => &[StepKind::Fruits],
            DemoPath::Echo => &[StepKind::Echo],
        }
    }

    pub fn prints_fruits(self) -> bool {
        self.steps().contains(&StepKind::Fruits)
    }
}
