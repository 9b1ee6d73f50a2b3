use enum_meta::EnumMeta;

#[derive(Clone, EnumMeta)]
pub enum Level {
    #[description("Low")]
    #[description("Again")]
    Low,
}

fn main() {}
