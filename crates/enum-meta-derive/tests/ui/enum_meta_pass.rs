use enum_meta::prelude::*;

mod facade {
    pub use ::enum_meta as meta;
}

mod labels {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Label(pub &'static str);

    impl Label {
        pub const fn of(text: &'static str) -> Self {
            Self(text)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub order: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hidden;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u32);

fn teal() -> Color {
    Color(0x0080_8080)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumMeta)]
#[meta(crate = "crate::facade::meta", kinds(Color))]
pub enum Stage {
    #[description("Draft document")]
    #[attribute(Rank { order: 1 }, labels::Label::of("draft"))]
    Draft = 3,
    #[description = "Under review"]
    #[attribute(Hidden, labels::Label("review"))]
    Review,
    #[attribute(Color = teal())]
    Published,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumMeta)]
pub enum Empty {}

fn main() {
    let values: Vec<_> = Enum::<Stage>::values().collect();
    assert_eq!(values, [Stage::Draft, Stage::Review, Stage::Published]);
    assert_eq!(Stage::NAMES, ["Draft", "Review", "Published"]);

    assert_eq!(Stage::Draft.attribute::<Rank>(), Some(Rank { order: 1 }));
    assert_eq!(Stage::Review.attribute::<labels::Label>(), Some(labels::Label("review")));
    assert!(Stage::Review.has_attribute::<Hidden>());
    assert_eq!(Stage::Published.attribute::<Color>(), Some(teal()));
    assert_eq!(Stage::Published.description(), "Published");

    assert!(Enum::<Empty>::is_empty());
}
