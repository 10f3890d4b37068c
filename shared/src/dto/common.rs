use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::team::TeamDto;

/// Shortest query worth sending to the team search
pub const MIN_QUERY_LEN: usize = 2;

/// Team search query parameters
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct TeamQuery {
    /// The trimmed search text
    #[validate(length(min = 2, message = "Search query must be at least 2 characters"))]
    pub q: String,
}

impl TeamQuery {
    /// Trims the raw input and validates what is left.
    pub fn parse(raw: &str) -> crate::Result<Self> {
        let query = Self {
            q: raw.trim().to_string(),
        };
        query.validate()?;
        Ok(query)
    }

    pub fn to_query_string(&self) -> String {
        format!("q={}", urlencoding::encode(&self.q))
    }
}

/// Common error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Form posted to `/teams/select`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectTeamForm {
    pub team_id: String,
    pub team_name: String,
    pub q: String,
}

impl SelectTeamForm {
    /// A club card click selects the team and uses its name as the query.
    pub fn for_team(team: &TeamDto) -> Self {
        Self {
            team_id: team.id.to_string(),
            team_name: team.name_or_empty().to_string(),
            q: team.name_or_empty().to_string(),
        }
    }

    /// `application/x-www-form-urlencoded` body
    pub fn to_form_body(&self) -> String {
        [
            ("team_id", &self.team_id),
            ("team_name", &self.team_name),
            ("q", &self.q),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("" ; "empty")]
    #[test_case("a" ; "single char")]
    #[test_case("  b  " ; "single char padded")]
    fn short_queries_are_rejected(raw: &str) {
        assert!(TeamQuery::parse(raw).is_err());
    }

    #[test_case("ab", "ab")]
    #[test_case("  Real Madrid ", "Real Madrid")]
    fn queries_are_trimmed(raw: &str, expected: &str) {
        assert_eq!(TeamQuery::parse(raw).unwrap().q, expected);
    }

    #[test]
    fn query_string_is_encoded() {
        let query = TeamQuery::parse("Atlético & Co").unwrap();
        assert_eq!(query.to_query_string(), "q=Atl%C3%A9tico%20%26%20Co");
    }

    #[test]
    fn select_form_uses_team_name_as_query() {
        let form = SelectTeamForm::for_team(&TeamDto::new(64, "Liverpool FC"));
        assert_eq!(form.team_id, "64");
        assert_eq!(form.team_name, "Liverpool FC");
        assert_eq!(form.q, "Liverpool FC");
        assert_eq!(form.to_form_body(), "team_id=64&team_name=Liverpool%20FC&q=Liverpool%20FC");
    }

    #[test]
    fn select_form_for_unnamed_team_posts_empty_name() {
        let team = TeamDto {
            id: 3.into(),
            ..Default::default()
        };
        assert_eq!(SelectTeamForm::for_team(&team).to_form_body(), "team_id=3&team_name=&q=");
    }

    #[test]
    fn select_form_for_team_without_id_posts_empty_id() {
        let team: TeamDto = serde_json::from_str(r#"{"id":null,"name":"Ghost FC"}"#).unwrap();
        assert_eq!(SelectTeamForm::for_team(&team).to_form_body(), "team_id=&team_name=Ghost%20FC&q=Ghost%20FC");
    }
}
