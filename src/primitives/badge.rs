//! Badge variants: small status indicators and labels.

use super::Primitive;
use crate::util::split_tokens;
use crate::variant::{Axis, ConfigurationError, Descriptor, Selection, VariantProps};

axis_values! {
    /// Badge color scheme.
    pub enum BadgeVariant {
        Default => "default",
        Secondary => "secondary",
        Destructive => "destructive",
        Success => "success",
        Warning => "warning",
        Outline => "outline",
        Ghost => "ghost",
        Gradient => "gradient",
    }
}

axis_values! {
    pub enum BadgeSize {
        Sm => "sm",
        Default => "default",
        Lg => "lg",
        Xl => "xl",
    }
}

/// The badge primitive.
pub struct Badge;

impl Primitive for Badge {
    const NAME: &'static str = "badge";
    type Props = BadgeProps;

    fn descriptor() -> Result<Descriptor, ConfigurationError> {
        Descriptor::builder()
            .base("inline-flex items-center rounded-full font-medium transition-all duration-200 ease-in-out")
            .axis(
                Axis::new("variant")
                    .value(
                        "default",
                        [
                            "bg-blue-600 text-white shadow-lg shadow-blue-500/25",
                            "hover:bg-blue-700 hover:shadow-xl hover:shadow-blue-500/30 hover:scale-105",
                        ],
                    )
                    .value(
                        "secondary",
                        [
                            "bg-gray-100 text-gray-900 border border-gray-200",
                            "hover:bg-gray-200 hover:scale-105",
                        ],
                    )
                    .value(
                        "destructive",
                        [
                            "bg-red-600 text-white shadow-lg shadow-red-500/25",
                            "hover:bg-red-700 hover:shadow-xl hover:shadow-red-500/30 hover:scale-105",
                        ],
                    )
                    .value(
                        "success",
                        [
                            "bg-green-600 text-white shadow-lg shadow-green-500/25",
                            "hover:bg-green-700 hover:shadow-xl hover:shadow-green-500/30 hover:scale-105",
                        ],
                    )
                    .value(
                        "warning",
                        [
                            "bg-amber-500 text-white shadow-lg shadow-amber-500/25",
                            "hover:bg-amber-600 hover:shadow-xl hover:shadow-amber-500/30 hover:scale-105",
                        ],
                    )
                    .value(
                        "outline",
                        [
                            "border-2 border-gray-200 bg-white text-gray-900",
                            "hover:bg-gray-50 hover:border-gray-300 hover:scale-105",
                        ],
                    )
                    .value(
                        "ghost",
                        [
                            "text-gray-700 bg-transparent",
                            "hover:bg-gray-100 hover:text-gray-900 hover:scale-105",
                        ],
                    )
                    .value(
                        "gradient",
                        [
                            "bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-lg shadow-blue-500/25",
                            "hover:from-blue-700 hover:to-purple-700 hover:shadow-xl hover:shadow-blue-500/30 hover:scale-105",
                        ],
                    ),
            )
            .axis(
                Axis::new("size")
                    .value("sm", "px-2 py-0.5 text-xs h-5")
                    .value("default", "px-2.5 py-1 text-xs h-6")
                    .value("lg", "px-3 py-1.5 text-sm h-7")
                    .value("xl", "px-4 py-2 text-base h-8"),
            )
            .default_value("variant", "default")
            .default_value("size", "default")
            .build()
    }
}

/// Typed input for [`Badge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeProps {
    pub variant: Option<BadgeVariant>,
    pub size: Option<BadgeSize>,
    pub class: Option<String>,
}

impl BadgeProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl VariantProps for BadgeProps {
    fn selection(&self) -> Selection {
        Selection::new()
            .with_opt("variant", self.variant.map(BadgeVariant::as_str))
            .with_opt("size", self.size.map(BadgeSize::as_str))
    }

    fn overrides(&self) -> Vec<String> {
        self.class.as_deref().map(split_tokens).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_enums_match_descriptor() {
        let descriptor = Badge::descriptor().unwrap();
        let variants: Vec<&str> = descriptor.axis("variant").unwrap().value_names().collect();
        let typed: Vec<&str> = BadgeVariant::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(variants, typed);

        let sizes: Vec<&str> = descriptor.axis("size").unwrap().value_names().collect();
        let typed: Vec<&str> = BadgeSize::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(sizes, typed);
    }

    #[test]
    fn test_badge_default_resolution() {
        let tokens = Badge::descriptor().unwrap().default_tokens();
        assert_eq!(tokens.tokens()[0], "inline-flex");
        assert!(tokens.contains("bg-blue-600"));
        assert!(tokens.contains("px-2.5"));
    }

    #[test]
    fn test_badge_gradient_xl_with_class() {
        let props = BadgeProps::new()
            .variant(BadgeVariant::Gradient)
            .size(BadgeSize::Xl)
            .class("uppercase");
        let tokens = Badge::descriptor().unwrap().resolve_props(&props);
        assert!(tokens.contains("to-purple-600"));
        assert!(tokens.contains("text-base"));
        assert_eq!(tokens.tokens().last().unwrap(), "uppercase");
    }
}
