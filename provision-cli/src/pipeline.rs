use std::process::Command;

use anyhow::{Context, Result, bail};
use log::info;

/// One external tool invocation, fully planned (name + argv) before
/// anything is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionStep {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
}

/// Run the steps in order, synchronously, stopping at the first failure
/// and naming the step that failed. Nothing is retried.
pub fn run_steps(steps: &[ProvisionStep]) -> Result<()> {
    for step in steps {
        info!("{}...", step.name);
        let status = Command::new(&step.program)
            .args(&step.args)
            .status()
            .with_context(|| format!("failed to run {}", step.program))?;

        if !status.success() {
            bail!(
                "step '{}' failed (exit code {:?})",
                step.name,
                status.code()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(name: &str, program: &str) -> ProvisionStep {
        ProvisionStep {
            name: name.into(),
            program: program.into(),
            args: vec![],
        }
    }

    #[test]
    fn all_steps_succeeding_is_ok() {
        run_steps(&[step("first", "true"), step("second", "true")]).unwrap();
    }

    #[test]
    fn failure_names_the_step_and_stops() {
        let err = run_steps(&[
            step("write CA certificate", "false"),
            step("write device certificate", "true"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("write CA certificate"));
    }

    #[test]
    fn missing_program_reports_which_tool() {
        let err = run_steps(&[step("flash", "definitely-not-a-real-tool-xyz")]).unwrap_err();
        assert!(format!("{:#}", err).contains("definitely-not-a-real-tool-xyz"));
    }
}
