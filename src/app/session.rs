use crate::config::resolve_fruit_list;
use crate::core::echo::EchoDemo;
use crate::core::fruits::{FruitList, FruitsDemo};
use crate::core::gcd::GcdDemo;
use crate::core::runner::DemoRunner;
use crate::core::{ConfigProvider, Demo, DemoPath, StepKind, Storage};
use crate::utils::error::{DemoError, Result};

/// Wires storage and configuration into the steps of a demo path.
pub struct Session<S: Storage + Clone> {
    storage: S,
    fruit_list: String,
    echo_file: String,
}

impl<S: Storage + Clone> Session<S> {
    pub fn new<C: ConfigProvider>(storage: S, config: &C) -> Self {
        Self {
            storage,
            fruit_list: resolve_fruit_list(config),
            echo_file: config.echo_file().to_string(),
        }
    }

    pub fn fruit_list_path(&self) -> &str {
        &self.fruit_list
    }

    pub fn echo_file(&self) -> &str {
        &self.echo_file
    }

    /// Load the process-wide fruit list if `path` prints it. Called before any
    /// step runs so a missing resource fails the process up front.
    pub async fn prepare(&self, path: DemoPath) -> Result<Option<&'static FruitList>> {
        if !path.prints_fruits() {
            return Ok(None);
        }
        FruitList::global(&self.storage, &self.fruit_list)
            .await
            .map(Some)
    }

    /// Load a fresh fruit list, bypassing the process-wide one.
    pub async fn load_fruits(&self) -> Result<FruitList> {
        FruitList::load(&self.storage, &self.fruit_list).await
    }

    pub fn runner<'a>(
        &'a self,
        path: DemoPath,
        fruits: Option<&'a FruitList>,
    ) -> Result<DemoRunner<'a>> {
        let mut steps: Vec<Box<dyn Demo + 'a>> = Vec::new();

        for step in path.steps() {
            match step {
                StepKind::Gcd => steps.push(Box::new(GcdDemo)),
                StepKind::Fruits => {
                    let list = fruits.ok_or_else(|| DemoError::MissingResource {
                        path: self.fruit_list.clone(),
                    })?;
                    steps.push(Box::new(FruitsDemo::new(list)));
                }
                StepKind::Echo => steps.push(Box::new(EchoDemo::new(
                    self.storage.clone(),
                    self.echo_file.clone(),
                ))),
            }
        }

        Ok(DemoRunner::new(steps))
    }
}
