use enum_meta::EnumMeta;

#[derive(EnumMeta)]
pub struct Settings {
    pub verbose: bool,
}

fn main() {}
