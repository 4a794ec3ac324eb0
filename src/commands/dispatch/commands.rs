//! Command implementations for all anansi commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use anansi_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::{ElementsArgs, GetArgs, LeavesArgs, WalkArgs};
    use crate::commands::dispatch::macros::trace_command_always;
    use crate::commands::walk::WalkOptions;
    use crate::commands::{elements, get, leaves, walk};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        let result = match cmd {
            Commands::Elements(args) => execute_elements(ctx, args),
            Commands::Leaves(args) => execute_leaves(ctx, args),
            Commands::Get(args) => execute_get(ctx, args),
            Commands::Walk(args) => execute_walk(ctx, args),
        };
        trace_command_always!(ctx.start, "execute_command");
        result
    }

    fn execute_elements(ctx: &CommandContext, args: &ElementsArgs) -> Result<()> {
        elements::execute(ctx, &args.file, ctx.show_values(args.paths_only))
    }

    fn execute_leaves(ctx: &CommandContext, args: &LeavesArgs) -> Result<()> {
        leaves::execute(ctx, &args.paths, ctx.show_values(args.paths_only))
    }

    fn execute_get(ctx: &CommandContext, args: &GetArgs) -> Result<()> {
        get::execute(ctx, &args.file, &args.path)
    }

    fn execute_walk(ctx: &CommandContext, args: &WalkArgs) -> Result<()> {
        walk::execute(
            ctx,
            &args.graph,
            WalkOptions {
                root: args.root.clone(),
                order: args.order.unwrap_or(ctx.config.walk.order),
                limit: args.limit.unwrap_or(ctx.config.walk.limit),
                prune: args.prune.iter().cloned().collect(),
                remove: args.remove.iter().cloned().collect(),
            },
        )
    }
}
