use uuid::Uuid;

/// Records carrying a stable identifier, assigned once at creation.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// One-line label for logs and confirmation prompts.
pub trait Displayable {
    fn display_label(&self) -> String;
}
