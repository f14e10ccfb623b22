use crate::commands::{CmdMessage, CmdResult, DisplayInternship};
use crate::error::Result;
use crate::list::InternshipList;

pub fn run(internships: &InternshipList, keyword: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.listed = internships
        .find(keyword)
        .enumerate()
        .map(|(i, internship)| DisplayInternship {
            index: i + 1,
            internship: internship.clone(),
        })
        .collect();

    if result.listed.is_empty() {
        result.add_message(CmdMessage::info(
            "No internships with this Company or Role found.",
        ));
    }
    Ok(result)
}
