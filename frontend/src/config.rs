pub struct Config;

impl Config {
    /// Container the club cards are rendered into
    pub const CLUB_GRID_ID: &'static str = "club-grid";
    pub const TEAM_FORM_ID: &'static str = "team-select-form";
    pub const TEAM_SEARCH_ID: &'static str = "team-search";
    pub const TEAM_ID_FIELD: &'static str = "team_id";
    pub const TEAM_NAME_FIELD: &'static str = "team_name";

    pub fn api_base_url() -> String {
        // The calendar server renders these pages itself, so every endpoint lives
        // on the same origin and relative URLs are enough.
        "".to_string()
    }

    /// Quiet period after the last keystroke before a team search is sent
    pub fn search_debounce_ms() -> u32 {
        250
    }
}
