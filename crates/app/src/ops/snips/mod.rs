use clap::{Args, Subcommand};

pub mod add;
pub mod ls;
pub mod rm;
pub mod share;

use crate::op::Op;

crate::command_enum! {
    (Ls, ls::Ls),
    (Add, add::Add),
    (Rm, rm::Rm),
    (Share, share::Share),
}

// Rename the generated Command to SnipsCommand for clarity
pub type SnipsCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Snips {
    #[command(subcommand)]
    pub command: SnipsCommand,
}

#[async_trait::async_trait]
impl Op for Snips {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
