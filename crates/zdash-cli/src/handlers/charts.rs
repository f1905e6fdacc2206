use anyhow::Result;

use super::HandlerContext;
use super::context::finish;
use crate::presentation::presenters;

pub fn handle_types(ctx: &HandlerContext) -> Result<()> {
    let session = ctx.load_session()?;
    ctx.render(presenters::present_project_types(&session))?;
    finish(&session)
}

pub fn handle_links(ctx: &HandlerContext) -> Result<()> {
    let session = ctx.load_session()?;
    ctx.render(presenters::present_linked_styleguides(&session))?;
    finish(&session)
}
