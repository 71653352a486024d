//! Card variants and the fixed styling of card sections.

use super::Primitive;
use crate::util::split_tokens;
use crate::variant::{Axis, ConfigurationError, Descriptor, Selection, TokenList, VariantProps};

axis_values! {
    /// Card surface treatment.
    pub enum CardVariant {
        Default => "default",
        Outlined => "outlined",
        Elevated => "elevated",
        Glass => "glass",
        Gradient => "gradient",
    }
}

axis_values! {
    /// Inner padding of a card.
    pub enum CardPadding {
        None => "none",
        Sm => "sm",
        Default => "default",
        Lg => "lg",
        Xl => "xl",
    }
}

/// The card primitive.
pub struct Card;

impl Primitive for Card {
    const NAME: &'static str = "card";
    type Props = CardProps;

    fn descriptor() -> Result<Descriptor, ConfigurationError> {
        Descriptor::builder()
            .base("rounded-xl border bg-white text-gray-900 transition-all duration-300 ease-out group")
            .axis(
                Axis::new("variant")
                    .value(
                        "default",
                        [
                            "border-gray-200 shadow-lg shadow-gray-900/5",
                            "hover:shadow-xl hover:shadow-gray-900/10 hover:translate-y-[-2px]",
                        ],
                    )
                    .value(
                        "outlined",
                        [
                            "border-2 border-gray-200 shadow-sm",
                            "hover:border-blue-300 hover:shadow-md transition-all duration-300",
                        ],
                    )
                    .value(
                        "elevated",
                        [
                            "border-gray-200 shadow-xl shadow-gray-900/10",
                            "hover:shadow-2xl hover:shadow-gray-900/15 hover:translate-y-[-4px]",
                        ],
                    )
                    .value(
                        "glass",
                        [
                            "backdrop-blur-xl bg-white/80 border-white/20 shadow-xl shadow-gray-900/10",
                            "hover:shadow-2xl hover:shadow-gray-900/15",
                        ],
                    )
                    .value(
                        "gradient",
                        [
                            "bg-gradient-to-br from-gray-50 to-gray-100 border-gray-200 shadow-lg shadow-gray-900/5",
                            "hover:shadow-xl hover:shadow-gray-900/10",
                        ],
                    ),
            )
            .axis(
                Axis::new("padding")
                    .value("none", "p-0")
                    .value("sm", "p-4")
                    .value("default", "p-6")
                    .value("lg", "p-8")
                    .value("xl", "p-10"),
            )
            .default_value("variant", "default")
            .default_value("padding", "default")
            .build()
    }
}

/// Typed input for [`Card`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardProps {
    pub variant: Option<CardVariant>,
    pub padding: Option<CardPadding>,
    pub class: Option<String>,
}

impl CardProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn padding(mut self, padding: CardPadding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl VariantProps for CardProps {
    fn selection(&self) -> Selection {
        Selection::new()
            .with_opt("variant", self.variant.map(CardVariant::as_str))
            .with_opt("padding", self.padding.map(CardPadding::as_str))
    }

    fn overrides(&self) -> Vec<String> {
        self.class.as_deref().map(split_tokens).unwrap_or_default()
    }
}

axis_values! {
    /// Sections composed inside a card. They have no variants, only fixed
    /// tokens followed by the caller's class.
    pub enum CardPart {
        Header => "header",
        Title => "title",
        Description => "description",
        Content => "content",
        Footer => "footer",
    }
}

impl CardPart {
    fn base(self) -> &'static str {
        match self {
            CardPart::Header => "flex flex-col space-y-2 p-6",
            CardPart::Title => {
                "text-xl font-semibold leading-tight tracking-tight text-gray-900 group-hover:text-blue-700 transition-colors duration-200"
            }
            CardPart::Description => "text-sm text-gray-600 leading-relaxed",
            CardPart::Content => "p-6 pt-0",
            CardPart::Footer => {
                "flex items-center justify-between p-6 pt-0 border-t border-border/50 mt-4"
            }
        }
    }
}

/// Tokens for a card section: its fixed tokens, then `class`.
///
/// # Example
///
/// ```rust
/// use variance::{card_part_classes, CardPart};
///
/// let tokens = card_part_classes(CardPart::Content, Some("text-center"));
/// assert_eq!(tokens.to_string(), "p-6 pt-0 text-center");
/// ```
pub fn card_part_classes(part: CardPart, class: Option<&str>) -> TokenList {
    let mut tokens = split_tokens(part.base());
    if let Some(class) = class {
        tokens.extend(split_tokens(class));
    }
    TokenList::from(tokens)
}
