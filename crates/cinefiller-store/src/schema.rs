//! Content store queries.
//!
//! The table definitions live in the workspace `migrations/` directory.

/// Scripts of one project in repository order.
pub const SELECT_SCRIPTS: &str = r"
SELECT script_id, title, scene_scripts
FROM scripts
WHERE project_id = $1
ORDER BY position, script_id
";

/// Characters of one project in repository order.
pub const SELECT_CHARACTERS: &str = r"
SELECT character_id, name, description
FROM characters
WHERE project_id = $1
ORDER BY position, character_id
";
