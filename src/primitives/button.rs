//! Button variants.

use super::Primitive;
use crate::util::split_tokens;
use crate::variant::{Axis, ConfigurationError, Descriptor, Selection, VariantProps};

axis_values! {
    /// Visual kind of a button.
    pub enum ButtonVariant {
        Default => "default",
        Destructive => "destructive",
        Outline => "outline",
        Secondary => "secondary",
        Ghost => "ghost",
        Link => "link",
        Success => "success",
        Warning => "warning",
    }
}

axis_values! {
    /// Button dimensions. The `Icon*` sizes are square.
    pub enum ButtonSize {
        Sm => "sm",
        Default => "default",
        Lg => "lg",
        Xl => "xl",
        Icon => "icon",
        IconSm => "icon-sm",
        IconLg => "icon-lg",
    }
}

/// The button primitive.
pub struct Button;

impl Primitive for Button {
    const NAME: &'static str = "button";
    type Props = ButtonProps;

    fn descriptor() -> Result<Descriptor, ConfigurationError> {
        Descriptor::builder()
            .base([
                "inline-flex items-center justify-center whitespace-nowrap rounded-lg",
                "text-sm font-semibold transition-all duration-200 ease-in-out",
                "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-blue-500 focus-visible:ring-offset-2",
                "disabled:pointer-events-none disabled:opacity-50 relative overflow-hidden group",
            ])
            .axis(
                Axis::new("variant")
                    .value(
                        "default",
                        [
                            "bg-gradient-to-r from-blue-600 to-blue-700 text-white shadow-lg shadow-blue-500/25",
                            "hover:from-blue-700 hover:to-blue-800 hover:shadow-xl hover:shadow-blue-500/30 hover:scale-[1.02]",
                            "active:scale-[0.98] border border-blue-600/20",
                        ],
                    )
                    .value(
                        "destructive",
                        [
                            "bg-gradient-to-r from-red-600 to-red-700 text-white shadow-lg shadow-red-500/25",
                            "hover:from-red-700 hover:to-red-800 hover:shadow-xl hover:shadow-red-500/30 hover:scale-[1.02]",
                            "active:scale-[0.98] border border-red-600/20",
                        ],
                    )
                    .value(
                        "outline",
                        [
                            "border-2 border-gray-200 bg-white text-gray-900 shadow-sm",
                            "hover:bg-gray-50 hover:border-blue-300 hover:text-blue-700 hover:shadow-md hover:scale-[1.02]",
                            "active:scale-[0.98]",
                        ],
                    )
                    .value(
                        "secondary",
                        [
                            "bg-gray-100 text-gray-900 shadow-sm border border-gray-200",
                            "hover:bg-gray-200 hover:shadow-md hover:scale-[1.02]",
                            "active:scale-[0.98]",
                        ],
                    )
                    .value(
                        "ghost",
                        [
                            "text-gray-700 hover:bg-gray-100 hover:text-gray-900",
                            "hover:scale-[1.02] active:scale-[0.98] transition-all duration-200",
                        ],
                    )
                    .value(
                        "link",
                        [
                            "text-blue-600 underline-offset-4 hover:underline hover:text-blue-700",
                            "transition-colors duration-200",
                        ],
                    )
                    .value(
                        "success",
                        [
                            "bg-gradient-to-r from-green-600 to-green-700 text-white shadow-lg shadow-green-500/25",
                            "hover:from-green-700 hover:to-green-800 hover:shadow-xl hover:shadow-green-500/30 hover:scale-[1.02]",
                            "active:scale-[0.98] border border-green-600/20",
                        ],
                    )
                    .value(
                        "warning",
                        [
                            "bg-gradient-to-r from-amber-500 to-amber-600 text-white shadow-lg shadow-amber-500/25",
                            "hover:from-amber-600 hover:to-amber-700 hover:shadow-xl hover:shadow-amber-500/30 hover:scale-[1.02]",
                            "active:scale-[0.98] border border-amber-500/20",
                        ],
                    ),
            )
            .axis(
                Axis::new("size")
                    .value("sm", "h-8 px-3 text-xs rounded-md")
                    .value("default", "h-10 px-4 text-sm rounded-lg")
                    .value("lg", "h-12 px-6 text-base rounded-lg")
                    .value("xl", "h-14 px-8 text-lg rounded-xl")
                    .value("icon", "h-10 w-10 rounded-lg")
                    .value("icon-sm", "h-8 w-8 rounded-md")
                    .value("icon-lg", "h-12 w-12 rounded-xl"),
            )
            .default_value("variant", "default")
            .default_value("size", "default")
            .build()
    }
}

/// Typed input for [`Button`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub variant: Option<ButtonVariant>,
    pub size: Option<ButtonSize>,
    /// Extra class string, appended last.
    pub class: Option<String>,
}

impl ButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl VariantProps for ButtonProps {
    fn selection(&self) -> Selection {
        Selection::new()
            .with_opt("variant", self.variant.map(ButtonVariant::as_str))
            .with_opt("size", self.size.map(ButtonSize::as_str))
    }

    fn overrides(&self) -> Vec<String> {
        self.class.as_deref().map(split_tokens).unwrap_or_default()
    }
}
