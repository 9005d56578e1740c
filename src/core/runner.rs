use crate::domain::ports::{Console, Demo};
use crate::utils::error::Result;
use std::time::Instant;
use tokio::io::AsyncWriteExt;

/// Runs demo steps in order against one console, stopping at the first error.
pub struct DemoRunner<'a> {
    steps: Vec<Box<dyn Demo + 'a>>,
}

impl<'a> DemoRunner<'a> {
    pub fn new(steps: Vec<Box<dyn Demo + 'a>>) -> Self {
        Self { steps }
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    pub async fn run(&self, console: &mut Console<'_>) -> Result<()> {
        tracing::info!("Running {} step(s): {:?}", self.steps.len(), self.step_names());

        for step in &self.steps {
            let started = Instant::now();
            tracing::debug!("Starting step '{}'", step.name());

            if let Err(e) = step.run(console).await {
                tracing::warn!("Step '{}' failed after {:?}", step.name(), started.elapsed());
                return Err(e);
            }

            tracing::debug!("Finished step '{}' in {:?}", step.name(), started.elapsed());
        }

        console.output.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fruits::{FruitList, FruitsDemo};
    use crate::core::gcd::GcdDemo;
    use crate::utils::error::DemoError;

    #[tokio::test]
    async fn test_runs_steps_in_order() {
        let list = FruitList::parse("Apple\nBanana\nCherry\n");
        let steps: Vec<Box<dyn Demo + '_>> = vec![Box::new(GcdDemo), Box::new(FruitsDemo::new(&list))];
        let runner = DemoRunner::new(steps);
        assert_eq!(runner.step_names(), vec!["gcd", "fruits"]);

        let mut input: &[u8] = b"48 18\n";
        let mut output: Vec<u8> = Vec::new();
        let mut console = Console::new(&mut input, &mut output);
        runner.run(&mut console).await.unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "6\nApple\nBanana\nCherry\n"
        );
    }

    #[tokio::test]
    async fn test_stops_at_first_error() {
        let list = FruitList::parse("Apple\n");
        let steps: Vec<Box<dyn Demo + '_>> = vec![Box::new(GcdDemo), Box::new(FruitsDemo::new(&list))];
        let runner = DemoRunner::new(steps);

        let mut input: &[u8] = b"48 eighteen\n";
        let mut output: Vec<u8> = Vec::new();
        let mut console = Console::new(&mut input, &mut output);
        let err = runner.run(&mut console).await.unwrap_err();

        assert!(matches!(err, DemoError::MalformedInput { .. }));
        assert!(output.is_empty());
    }
}
