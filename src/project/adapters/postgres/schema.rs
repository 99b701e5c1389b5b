//! Diesel schema for project persistence.

diesel::table! {
    /// Project records with their membership sets.
    projects (project_id) {
        /// Store-assigned project identifier.
        project_id -> Int4,
        /// Project name.
        project_name -> Text,
        /// Project description.
        description -> Text,
        /// Project author.
        author -> Text,
        /// Project URL.
        project_url -> Text,
        /// Project lifecycle status.
        #[max_length = 32]
        status -> Varchar,
        /// Participating user emails.
        participating_users -> Array<Text>,
        /// Waiting user emails.
        waiting_users -> Array<Text>,
    }
}
