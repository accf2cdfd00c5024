//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Storage-assigned task identifier (sequence-backed, never
        /// reused).
        id -> Int8,
        /// Task title, non-empty after trimming.
        #[max_length = 255]
        title -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
