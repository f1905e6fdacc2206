use anyhow::Result;

use super::HandlerContext;
use super::context::finish;
use crate::presentation::presenters;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let session = ctx.load_session()?;
    ctx.render(presenters::present_dashboard(&session))?;
    finish(&session)
}
