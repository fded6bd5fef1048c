use crate::commands::CmdResult;
use crate::error::{PaperdexError, Result};
use crate::model::PaperSet;

pub fn run(set: &PaperSet, id: &str) -> Result<CmdResult> {
    let paper = set
        .find_by_id(id)
        .ok_or_else(|| PaperdexError::PaperNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_papers(vec![paper.clone()]))
}
