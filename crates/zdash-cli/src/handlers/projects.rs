use anyhow::{Result, anyhow};
use std::io::{self, Write};

use super::HandlerContext;
use super::context::finish;
use crate::presentation::presenters;
use crate::presentation::view_models::{ProjectTableViewModel, SessionViewModel};
use crate::presentation::views::table::HEADERS;

const URL_HEADER: &str = "Styleguide URL";

pub fn handle(ctx: &HandlerContext, csv: bool, platform: Option<String>) -> Result<()> {
    let session = ctx.load_session()?;
    let result = presenters::present_projects(&session, platform.as_deref());

    if !csv {
        ctx.render(result)?;
        return finish(&session);
    }

    match &result.content {
        SessionViewModel::Ready(table) => write_csv(table, io::stdout().lock()),
        SessionViewModel::Failed { error } => Err(anyhow!("Failed to load dashboard: {}", error)),
        SessionViewModel::Loading => Err(anyhow!("Dashboard did not finish loading")),
    }
}

/// Table rows as CSV; absent values are empty fields
pub fn write_csv<W: Write>(table: &ProjectTableViewModel, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header = HEADERS.to_vec();
    header.push(URL_HEADER);
    writer.write_record(&header)?;

    for row in &table.rows {
        let members = row.number_of_members.to_string();
        let screens = row.number_of_screens.to_string();
        writer.write_record([
            row.name.as_str(),
            row.platform.as_str(),
            row.workflow_status.as_deref().unwrap_or(""),
            members.as_str(),
            screens.as_str(),
            row.linked_styleguide_name.as_deref().unwrap_or(""),
            row.linked_styleguide_url.as_deref().unwrap_or(""),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
