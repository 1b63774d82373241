use crate::SelectionArgs;
use logscope_api::ApiResult;
use logscope_core::NamespaceSelector;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "Level")]
    level: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Group")]
    group: String,
}

/// One row per candidate, shallowest first. Levels follow expansion order.
fn candidate_rows(selector: &NamespaceSelector, name: &str) -> ApiResult<Vec<CandidateRow>> {
    Ok(selector
        .grouped(name)?
        .into_iter()
        .enumerate()
        .map(|(level, logger)| CandidateRow {
            level,
            name: logger.name().to_string(),
            group: logger.group().unwrap_or("-").to_string(),
        })
        .collect())
}

pub fn run(selection: SelectionArgs, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let base = selection.base.ok_or("--base is required")?;
    let levels = selection.levels.ok_or("--levels is required")?;
    let selector = NamespaceSelector::new(base, levels, selection.omit_class_loggers)?;

    let rows = candidate_rows(&selector, name)?;
    println!("{}", Table::new(rows).with(Style::psql()).to_string());
    Ok(())
}
