//! First-match lookups over repository collections.
//!
//! Every lookup is a single linear scan that returns the first element
//! matching the requested key. A missing key is an ordinary `None`.

use cinefiller_core::model::{CharacterProfile, DialogueLine, SceneScript, Script};
use tracing::debug;

/// Finds the first script whose id equals `script_id`.
#[must_use]
pub fn find_script<'a>(scripts: &'a [Script], script_id: &str) -> Option<&'a Script> {
    scripts.iter().find(|script| script.id == script_id)
}

/// Finds the first scene of `script` whose scene number equals `scene_number`.
#[must_use]
pub fn find_scene<'a>(script: &'a Script, scene_number: &str) -> Option<&'a SceneScript> {
    script
        .scene_scripts
        .iter()
        .find(|scene| scene.scene_number == scene_number)
}

/// Finds the first line of `scene` spoken under `character_name`.
#[must_use]
pub fn find_dialogue_line<'a>(
    scene: &'a SceneScript,
    character_name: &str,
) -> Option<&'a DialogueLine> {
    scene
        .dialogue
        .iter()
        .find(|line| line.character_name == character_name)
}

/// Resolves character references against `characters`.
///
/// The output follows the order of `character_ids`, one profile per
/// reference that resolved (duplicated references yield duplicated
/// profiles). References with no matching profile are dropped.
#[must_use]
pub fn resolve_characters(
    characters: &[CharacterProfile],
    character_ids: &[String],
) -> Vec<CharacterProfile> {
    character_ids
        .iter()
        .filter_map(|character_id| {
            let found = characters.iter().find(|c| &c.id == character_id);
            if found.is_none() {
                debug!(%character_id, "dropping unresolved character reference");
            }
            found.cloned()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinefiller_test_support::fixtures::{
        character, dialogue, sample_scripts, scene, script,
    };

    #[test]
    fn test_find_script_returns_matching_script() {
        // Arrange
        let scripts = sample_scripts();

        // Act
        let found = find_script(&scripts, "s2");

        // Assert
        assert_eq!(found.map(|s| s.id.as_str()), Some("s2"));
    }

    #[test]
    fn test_find_script_returns_none_for_unknown_id() {
        let scripts = sample_scripts();

        assert!(find_script(&scripts, "missing").is_none());
    }

    #[test]
    fn test_find_script_first_match_wins_on_duplicate_ids() {
        // Arrange
        let mut first = script("p1", "dup", vec![scene("1")]);
        first.title = "first".to_owned();
        let mut second = script("p1", "dup", vec![]);
        second.title = "second".to_owned();
        let scripts = vec![first, second];

        // Act
        let found = find_script(&scripts, "dup").unwrap();

        // Assert
        assert_eq!(found.title, "first");
    }

    #[test]
    fn test_find_script_in_empty_collection_is_none() {
        assert!(find_script(&[], "s1").is_none());
    }

    #[test]
    fn test_find_scene_locates_scene_two_and_misses_ninety_nine() {
        // Arrange
        let scripts = sample_scripts();
        let s1 = find_script(&scripts, "s1").unwrap();

        // Act
        let two = find_scene(s1, "2");
        let ninety_nine = find_scene(s1, "99");

        // Assert
        assert_eq!(two.map(|s| s.scene_number.as_str()), Some("2"));
        assert!(ninety_nine.is_none());
    }

    #[test]
    fn test_find_scene_matches_labels_exactly() {
        let s = script("p1", "s1", vec![scene("1"), scene("1A")]);

        assert_eq!(find_scene(&s, "1A").unwrap().scene_number, "1A");
        assert!(find_scene(&s, "1a").is_none());
    }

    #[test]
    fn test_find_dialogue_line_returns_first_line_for_character() {
        // Arrange
        let mut s = scene("4");
        s.dialogue = vec![
            dialogue("c-mara", "MARA", "First."),
            dialogue("c-jonah", "JONAH", "Between."),
            dialogue("c-mara", "MARA", "Second."),
        ];

        // Act
        let line = find_dialogue_line(&s, "MARA").unwrap();

        // Assert
        assert_eq!(line.dialogue, "First.");
        assert!(find_dialogue_line(&s, "NOBODY").is_none());
    }

    #[test]
    fn test_resolve_characters_drops_unresolved_and_keeps_order() {
        // Arrange
        let characters = vec![character("b", "Bee")];
        let ids = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];

        // Act
        let resolved = resolve_characters(&characters, &ids);

        // Assert
        assert_eq!(resolved, vec![character("b", "Bee")]);
    }

    #[test]
    fn test_resolve_characters_follows_reference_order_and_duplicates() {
        // Arrange
        let characters = vec![character("a", "Ay"), character("b", "Bee")];
        let ids = vec!["b".to_owned(), "a".to_owned(), "b".to_owned()];

        // Act
        let names: Vec<String> = resolve_characters(&characters, &ids)
            .into_iter()
            .map(|c| c.name)
            .collect();

        // Assert
        assert_eq!(names, vec!["Bee", "Ay", "Bee"]);
    }

    #[test]
    fn test_resolve_characters_with_no_references_is_empty() {
        let characters = vec![character("a", "Ay")];

        assert!(resolve_characters(&characters, &[]).is_empty());
    }
}
