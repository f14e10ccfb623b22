use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::InternshipList;

pub fn run(internships: &mut InternshipList, index: usize) -> Result<CmdResult> {
    let removed = internships.delete(index)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted internship {}: {} - {}",
        index + 1,
        removed.company,
        removed.role
    )));
    Ok(result)
}
