//! SMS keyword parsing

use chartroom_domain::{PersonaId, SessionMode};

/// What an inbound text asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmsCommand {
    /// `START`: show the menu
    Menu,
    /// `1` / `2` / `3`: open a session in that mode
    Begin(SessionMode),
    /// `DONE`: finalize the active session
    Done,
    /// `PERSONA n` or `BOSS n`
    SelectPersona(PersonaId),
    /// Anything else is session content
    Text(String),
}

impl SmsCommand {
    /// Keywords are case-insensitive; mode digits must be the whole body.
    pub fn parse(body: &str) -> Self {
        let body = body.trim();
        let upper = body.to_uppercase();

        match body {
            "1" => return SmsCommand::Begin(SessionMode::BoardInvestors),
            "2" => return SmsCommand::Begin(SessionMode::Interview1on1),
            "3" => return SmsCommand::Begin(SessionMode::InvestorPitchPrep),
            _ => {}
        }
        if upper == "START" {
            return SmsCommand::Menu;
        }
        if upper == "DONE" {
            return SmsCommand::Done;
        }
        if let Some(persona) = parse_persona(&upper) {
            return SmsCommand::SelectPersona(persona);
        }
        SmsCommand::Text(body.to_string())
    }
}

fn parse_persona(upper: &str) -> Option<PersonaId> {
    let mut words = upper.split_whitespace();
    let keyword = words.next()?;
    let number = words.next()?;
    if words.next().is_some() || !matches!(keyword, "PERSONA" | "BOSS") {
        return None;
    }
    PersonaId::from_number(number.parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(SmsCommand::parse(" start "), SmsCommand::Menu);
        assert_eq!(SmsCommand::parse("Done"), SmsCommand::Done);
        assert_eq!(
            SmsCommand::parse("2"),
            SmsCommand::Begin(SessionMode::Interview1on1)
        );
        assert_eq!(
            SmsCommand::parse("boss 3"),
            SmsCommand::SelectPersona(PersonaId::Persona3)
        );
        assert_eq!(
            SmsCommand::parse("PERSONA 1"),
            SmsCommand::SelectPersona(PersonaId::Persona1)
        );
    }

    #[test]
    fn test_everything_else_is_text() {
        for body in ["4", "boss 4", "persona", "persona 1 please", "12", "We sell to dentists"] {
            assert_eq!(SmsCommand::parse(body), SmsCommand::Text(body.to_string()));
        }
    }
}
