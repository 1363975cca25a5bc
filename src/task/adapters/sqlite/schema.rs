//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Hyphenated UUID text.
        id -> Text,
        /// Required task title.
        title -> Text,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp (naive UTC).
        created_at -> Timestamp,
        /// Last mutation timestamp (naive UTC).
        updated_at -> Timestamp,
        /// Optional deadline (naive UTC).
        deadline -> Nullable<Timestamp>,
        /// Advisory priority, 0 (low) to 10 (high).
        priority -> Integer,
    }
}
