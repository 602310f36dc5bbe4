use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionConfiguration
{
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default)]
    pub add_day_policy: AddDayPolicy,
}

fn default_prompt() -> String
{
    "itinerary> ".to_string()
}

impl Default for SessionConfiguration
{
    fn default() -> Self
    {
        Self {
            prompt: default_prompt(),
            add_day_policy: AddDayPolicy::default(),
        }
    }
}

/// What happens to "add day" triggers that pile up behind an add that is
/// still waiting for the store.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AddDayPolicy
{
    /// Every trigger creates its own day.
    #[default]
    Preserve,
    /// Triggers queued behind a successful add are answered with the day that
    /// add created.
    Coalesce,
}
