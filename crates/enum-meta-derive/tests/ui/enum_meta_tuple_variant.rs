use enum_meta::EnumMeta;

#[derive(Clone, EnumMeta)]
pub enum Shape {
    Point,
    Circle(u32),
}

fn main() {}
