use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::InternshipList;
use crate::parser::UpdateFields;

/// Applies every field carried by the update. The parser has already
/// validated all values and the index is checked before the first mutation,
/// so the update is all-or-nothing.
pub fn run(
    internships: &mut InternshipList,
    index: usize,
    fields: &UpdateFields,
) -> Result<CmdResult> {
    internships.get(index)?;

    let shown = index + 1;
    let mut result = CmdResult::default();

    if let Some(company) = &fields.company {
        internships.update_company(index, company.clone())?;
        result.add_message(CmdMessage::success(format!(
            "Updated internship {shown} company to: {company}"
        )));
    }
    if let Some(role) = &fields.role {
        internships.update_role(index, role.clone())?;
        result.add_message(CmdMessage::success(format!(
            "Updated internship {shown} role to: {role}"
        )));
    }
    if let Some(deadline) = fields.deadline {
        internships.update_deadline(index, deadline)?;
        result.add_message(CmdMessage::success(format!(
            "Updated internship {shown} deadline to: {deadline}"
        )));
    }
    if let Some(pay) = fields.pay {
        internships.update_pay(index, pay)?;
        result.add_message(CmdMessage::success(format!(
            "Updated internship {shown} pay to: {pay}"
        )));
    }
    if let Some(status) = fields.status {
        internships.update_status(index, &status.to_string())?;
        result.add_message(CmdMessage::success(format!(
            "Updated internship {shown} status to: {status}"
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;
    use crate::error::StintError;
    use crate::model::{Internship, Status};

    fn seeded() -> InternshipList {
        let mut internships = InternshipList::new();
        internships.add(Internship::new(
            "Google".into(),
            "SWE".into(),
            Date::parse("01-01-2026").unwrap(),
            5000,
        ));
        internships
    }

    #[test]
    fn updates_multiple_fields_in_one_command() {
        let mut internships = seeded();
        let fields = UpdateFields {
            company: Some("Jane Street".into()),
            pay: Some(9000),
            status: Some(Status::Accepted),
            ..UpdateFields::default()
        };
        let result = run(&mut internships, 0, &fields).unwrap();

        let updated = internships.get(0).unwrap();
        assert_eq!(updated.company, "Jane Street");
        assert_eq!(updated.pay, 9000);
        assert_eq!(updated.status, Status::Accepted);
        assert_eq!(updated.role, "SWE");
        assert_eq!(result.messages.len(), 3);
    }

    #[test]
    fn invalid_index_mutates_nothing() {
        let mut internships = seeded();
        let fields = UpdateFields {
            company: Some("Jane Street".into()),
            ..UpdateFields::default()
        };
        assert!(matches!(
            run(&mut internships, 5, &fields),
            Err(StintError::InvalidIndex)
        ));
        assert_eq!(internships.get(0).unwrap().company, "Google");
    }
}
