use crate::commands::{CmdMessage, CmdResult, DisplayInternship};
use crate::error::Result;
use crate::list::{InternshipList, SortOrder};

pub fn run(internships: &mut InternshipList, order: SortOrder) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if internships.is_empty() {
        result.add_message(CmdMessage::info(
            "No internships found. Please add an internship first.",
        ));
        return Ok(result);
    }

    internships.sort(order);
    result.listed = internships
        .iter()
        .enumerate()
        .map(|(i, internship)| DisplayInternship {
            index: i + 1,
            internship: internship.clone(),
        })
        .collect();
    Ok(result)
}
