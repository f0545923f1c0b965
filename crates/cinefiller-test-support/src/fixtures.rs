//! Fixture builders for content entities.

use cinefiller_core::model::{CharacterProfile, DialogueLine, SceneScript, Script};

/// A script with the given scenes.
#[must_use]
pub fn script(project_id: &str, id: &str, scenes: Vec<SceneScript>) -> Script {
    Script {
        id: id.to_owned(),
        project_id: project_id.to_owned(),
        title: format!("Script {id}"),
        scene_scripts: scenes,
    }
}

/// A bare scene with no heading, action, characters or dialogue.
#[must_use]
pub fn scene(scene_number: &str) -> SceneScript {
    SceneScript {
        scene_number: scene_number.to_owned(),
        heading: None,
        action: None,
        character_ids: Vec::new(),
        dialogue: Vec::new(),
    }
}

/// A dialogue line spoken by `character_id` under `character_name`.
#[must_use]
pub fn dialogue(character_id: &str, character_name: &str, text: &str) -> DialogueLine {
    DialogueLine {
        character_name: character_name.to_owned(),
        dialogue: text.to_owned(),
        character_id: character_id.to_owned(),
        parenthetical: None,
    }
}

/// A character profile with no description.
#[must_use]
pub fn character(id: &str, name: &str) -> CharacterProfile {
    CharacterProfile {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
    }
}

/// Project `p1` with script `s1` holding scenes `1` and `2`.
///
/// Scene `1` features Mara and Jonah with two lines of dialogue; scene `2`
/// references Jonah and an unknown character `c-ghost`.
#[must_use]
pub fn sample_scripts() -> Vec<Script> {
    let opening = SceneScript {
        heading: Some("INT. COFFEE SHOP - DAY".to_owned()),
        action: Some("Rain streaks the window. MARA waits with two cups.".to_owned()),
        character_ids: vec!["c-mara".to_owned(), "c-jonah".to_owned()],
        dialogue: vec![
            dialogue("c-mara", "MARA", "You're late."),
            dialogue("c-jonah", "JONAH", "The train was later."),
        ],
        ..scene("1")
    };
    let rooftop = SceneScript {
        action: Some("JONAH alone on the rooftop.".to_owned()),
        character_ids: vec!["c-ghost".to_owned(), "c-jonah".to_owned()],
        ..scene("2")
    };
    vec![
        script("p1", "s1", vec![opening, rooftop]),
        script("p1", "s2", vec![scene("1")]),
    ]
}

/// The characters of project `p1`.
#[must_use]
pub fn sample_characters() -> Vec<CharacterProfile> {
    vec![character("c-mara", "Mara"), character("c-jonah", "Jonah")]
}
