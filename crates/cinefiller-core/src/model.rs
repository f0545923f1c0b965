//! Content entities owned by the repository layer.
//!
//! Identifiers are opaque strings. Scene numbers in particular are labels
//! such as `"1"`, `"1A"` or `"3B"` and carry no ordering of their own; the
//! order of a collection is the order the repository returned it in.

use serde::{Deserialize, Serialize};

/// A project's screenplay, composed of ordered scenes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Script identifier, unique within its project.
    pub id: String,
    /// The project this script belongs to.
    pub project_id: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Scenes in screenplay order.
    #[serde(default)]
    pub scene_scripts: Vec<SceneScript>,
}

/// A single scene within a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneScript {
    /// Scene label, unique within its script (e.g. `"1A"`).
    pub scene_number: String,
    /// Slug line such as `INT. COFFEE SHOP - DAY`.
    #[serde(default)]
    pub heading: Option<String>,
    /// Free-text action / description.
    #[serde(default)]
    pub action: Option<String>,
    /// References to `CharacterProfile::id`, in appearance order.
    #[serde(default)]
    pub character_ids: Vec<String>,
    /// Spoken lines in order.
    #[serde(default)]
    pub dialogue: Vec<DialogueLine>,
}

impl SceneScript {
    /// Returns the heading, or `Scene {scene_number}` when none is set.
    #[must_use]
    pub fn display_heading(&self) -> String {
        match &self.heading {
            Some(heading) => heading.clone(),
            None => format!("Scene {}", self.scene_number),
        }
    }
}

/// One spoken line attributed to a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    /// Name of the speaking character as written in the script.
    pub character_name: String,
    /// The spoken text.
    pub dialogue: String,
    /// Reference to the speaking `CharacterProfile`, if linked.
    #[serde(default)]
    pub character_id: String,
    /// Delivery hint, e.g. `(whispering)`.
    #[serde(default)]
    pub parenthetical: Option<String>,
}

/// A named character entity associated with a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterProfile {
    /// Character identifier, unique within its project.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
