//! Turning build plans into composite processes.

use crate::composite::{composite_build_process, Block, CompositeProcess};
use crate::logger::ProgressLogger;
use crate::process::{BuildProcess, CommandProcess};
use bb_protocol::plan_models::{BuildPlan, PlanAction, PlanBlock};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Build a composite process running every block of `plan` in order.
///
/// `run` blocks are delegated to a [`CommandProcess`] created when the block
/// starts, inside `working_dir`. `echo` blocks write their text to `logger`.
pub fn plan_to_process(plan: &BuildPlan, logger: Arc<dyn ProgressLogger>, working_dir: &Path) -> CompositeProcess {
    debug!(plan = %plan.name, blocks = plan.blocks.len(), "Building process from plan");

    let message_logger = logger.clone();
    composite_build_process(logger, |builder| {
        for plan_block in &plan.blocks {
            let block = block_of(plan_block);
            match &plan_block.action {
                PlanAction::Run(command_line) => {
                    let command_line = command_line.clone();
                    let dir = working_dir.to_path_buf();
                    builder.delegate(block, move || {
                        let process = CommandProcess::new(command_line).with_working_dir(dir);
                        Ok(Box::new(process) as Box<dyn BuildProcess>)
                    });
                }
                PlanAction::Echo(text) => {
                    let text = text.clone();
                    let logger = message_logger.clone();
                    builder.execute(block, move || {
                        logger.message(&text);
                        Ok(())
                    });
                }
            }
        }
    })
}

fn block_of(plan_block: &PlanBlock) -> Block {
    let block = Block::new(plan_block.name.as_str());
    match &plan_block.description {
        Some(description) => block.with_description(description.as_str()),
        None => block,
    }
}
