//! Naming helpers for migration generation
//!
//! Pure string transforms used to derive module, table, migration and class
//! names from free-form input. None of them validate their input: an empty
//! string maps to an empty string, and non-ASCII letters go through the same
//! word-splitting rules without transliteration.

use inflector::Inflector;

/// Irregular singular/plural pairs checked before the inflector rules
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Words with no distinct plural form
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "cattle",
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "hardware",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "police",
    "series",
    "sheep",
    "software",
    "species",
    "traffic",
];

/// Naming helpers for migration scaffolding
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Convert string to `StudlyCase` (each word capitalized, no separators)
    ///
    /// Words are split on `_`, `-`, whitespace and case boundaries. Input that
    /// is already `StudlyCase` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use modules_cli_lib::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_studly_case("blog"), "Blog");
    /// assert_eq!(TemplateHelpers::to_studly_case("create_posts_table"), "CreatePostsTable");
    /// assert_eq!(TemplateHelpers::to_studly_case("user-profile"), "UserProfile");
    /// ```
    #[must_use]
    pub fn to_studly_case(input: &str) -> String {
        input.to_pascal_case()
    }

    /// Convert string to `snake_case`
    ///
    /// Input made only of lowercase letters, digits and `_` is returned
    /// unchanged. Otherwise whitespace-separated words are joined and `_` is
    /// inserted before each uppercase letter, so digits stay attached to the
    /// word they follow.
    ///
    /// # Examples
    ///
    /// ```
    /// # use modules_cli_lib::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_snake_case("AddAuthorToPosts"), "add_author_to_posts");
    /// assert_eq!(TemplateHelpers::to_snake_case("add_author_to_posts"), "add_author_to_posts");
    /// assert_eq!(TemplateHelpers::to_snake_case("AddColumn2ToPosts"), "add_column2_to_posts");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        let already_snake = input
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if already_snake {
            return input.to_string();
        }

        let joined: String = input
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect();

        let mut snake = String::with_capacity(joined.len() + 4);
        let mut prev: Option<char> = None;
        for c in joined.chars() {
            if c.is_uppercase() && prev.is_some_and(|p| p != '_') {
                snake.push('_');
            }
            snake.extend(c.to_lowercase());
            prev = Some(c);
        }
        snake
    }

    /// Pluralize a word
    ///
    /// Only the segment after the last `_` or `-` is pluralized; the prefix is
    /// kept as is. Irregular and uncountable words are looked up first. A
    /// segment that is already plural is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use modules_cli_lib::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::pluralize("post"), "posts");
    /// assert_eq!(TemplateHelpers::pluralize("category"), "categories");
    /// assert_eq!(TemplateHelpers::pluralize("posts"), "posts");
    /// assert_eq!(TemplateHelpers::pluralize("person"), "people");
    /// assert_eq!(TemplateHelpers::pluralize("user_profile"), "user_profiles");
    /// ```
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        let split = input.rfind(['_', '-']).map_or(0, |idx| idx + 1);
        let (prefix, word) = input.split_at(split);
        if word.is_empty() {
            return input.to_string();
        }
        format!("{prefix}{}", Self::pluralize_word(word))
    }

    fn pluralize_word(word: &str) -> String {
        let lower = word.to_lowercase();
        if UNCOUNTABLE.contains(&lower.as_str()) {
            return word.to_string();
        }
        for &(singular, plural) in IRREGULAR {
            if lower == plural {
                return word.to_string();
            }
            if lower == singular {
                return Self::match_initial_case(word, plural);
            }
        }
        if word.to_singular().to_plural() == word {
            return word.to_string();
        }
        word.to_plural()
    }

    /// Capitalize `replacement` when `original` starts with an uppercase letter
    fn match_initial_case(original: &str, replacement: &str) -> String {
        if original.chars().next().is_some_and(char::is_uppercase) {
            replacement.to_title_case()
        } else {
            replacement.to_string()
        }
    }

    /// Normalize a table name: lowercase, then pluralize
    ///
    /// # Examples
    ///
    /// ```
    /// # use modules_cli_lib::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_table_name("Post"), "posts");
    /// assert_eq!(TemplateHelpers::to_table_name("posts"), "posts");
    /// ```
    #[must_use]
    pub fn to_table_name(table: &str) -> String {
        Self::pluralize(&table.to_lowercase())
    }

    /// Migration name used when none is given: `create_<table>_table`
    ///
    /// # Examples
    ///
    /// ```
    /// # use modules_cli_lib::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::default_migration_name("posts"), "create_posts_table");
    /// ```
    #[must_use]
    pub fn default_migration_name(table: &str) -> String {
        format!("create_{}_table", Self::to_snake_case(table))
    }

    /// Migration class name derived from a migration name
    ///
    /// # Examples
    ///
    /// ```
    /// # use modules_cli_lib::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_class_name("add_author_to_posts"), "AddAuthorToPosts");
    /// ```
    #[must_use]
    pub fn to_class_name(migration_name: &str) -> String {
        Self::to_studly_case(migration_name)
    }
}
