#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facility {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
}
