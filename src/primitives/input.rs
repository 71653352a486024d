//! Input field variants, the error-forces-variant rule, and the
//! surrounding field view (label, status icon, messages).

use serde::Serialize;

use super::Primitive;
use crate::identity::ensure_identity;
use crate::util::split_tokens;
use crate::variant::{Axis, ConfigurationError, Descriptor, Selection, TokenList, VariantProps};

axis_values! {
    pub enum InputSize {
        Sm => "sm",
        Default => "default",
        Lg => "lg",
    }
}

axis_values! {
    /// Validation state of an input.
    pub enum InputVariant {
        Default => "default",
        /// Reserved: forced whenever an error message is present.
        Error => "error",
        Success => "success",
        Warning => "warning",
    }
}

const WRAPPER: &str = "w-full group";
const LABEL: &str =
    "block text-sm font-medium text-gray-900 mb-2 transition-colors duration-200 group-hover:text-blue-700";
const REQUIRED_MARKER: &str = "text-red-500 ml-1";
const ICON_SLOT: &str = "absolute inset-y-0 right-0 flex items-center pr-3";
const ERROR_CONTAINER: &str = "mt-2 flex items-start space-x-2";
const ERROR_ICON: &str = "h-4 w-4 text-destructive mt-0.5 flex-shrink-0";
const ERROR_MESSAGE: &str = "text-sm text-destructive";
const HELPER_TEXT: &str = "mt-2 text-sm text-muted-foreground leading-relaxed";

/// The input primitive.
pub struct Input;

impl Primitive for Input {
    const NAME: &'static str = "input";
    type Props = InputProps;

    fn descriptor() -> Result<Descriptor, ConfigurationError> {
        Descriptor::builder()
            .base([
                "flex w-full rounded-lg border bg-white px-3 py-2 text-sm ring-offset-white",
                "file:border-0 file:bg-transparent file:text-sm file:font-medium placeholder:text-gray-500",
                "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2",
                "disabled:cursor-not-allowed disabled:opacity-50 transition-all duration-200 ease-in-out",
            ])
            .axis(
                Axis::new("size")
                    .value("sm", "h-8 px-3 text-xs rounded-md")
                    .value("default", "h-10 px-3 text-sm rounded-lg")
                    .value("lg", "h-12 px-4 text-base rounded-lg"),
            )
            .axis(
                Axis::new("variant")
                    .value(
                        "default",
                        [
                            "border-gray-200 focus-visible:ring-blue-500 focus-visible:border-blue-500",
                            "hover:border-gray-300 shadow-sm hover:shadow-md",
                        ],
                    )
                    .value(
                        "error",
                        [
                            "border-red-300 text-red-900 focus-visible:ring-red-500 focus-visible:border-red-500",
                            "hover:border-red-400 bg-red-50/50",
                        ],
                    )
                    .value(
                        "success",
                        [
                            "border-green-300 text-green-900 focus-visible:ring-green-500 focus-visible:border-green-500",
                            "hover:border-green-400 bg-green-50/50",
                        ],
                    )
                    .value(
                        "warning",
                        [
                            "border-amber-300 text-amber-900 focus-visible:ring-amber-500 focus-visible:border-amber-500",
                            "hover:border-amber-400 bg-amber-50/50",
                        ],
                    ),
            )
            .default_value("size", "default")
            .default_value("variant", "default")
            .build()
    }
}

/// Typed input for [`Input`].
///
/// A non-empty `error` overrides `variant` with [`InputVariant::Error`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputProps {
    pub size: Option<InputSize>,
    pub variant: Option<InputVariant>,
    pub class: Option<String>,
    pub id: Option<String>,
    pub label: Option<String>,
    pub error: Option<String>,
    pub helper_text: Option<String>,
    pub required: bool,
}

impl InputProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// The error message, if present and non-empty.
    pub fn active_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

impl VariantProps for InputProps {
    fn selection(&self) -> Selection {
        Selection::new()
            .with_opt("size", self.size.map(InputSize::as_str))
            .with_opt("variant", self.variant.map(InputVariant::as_str))
    }

    fn overrides(&self) -> Vec<String> {
        self.class.as_deref().map(split_tokens).unwrap_or_default()
    }

    fn forced(&self) -> Selection {
        match self.active_error() {
            Some(_) => Selection::new().with("variant", InputVariant::Error.as_str()),
            None => Selection::new(),
        }
    }
}

/// Icon shown inside the input's trailing slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusIcon {
    Error,
    Success,
    Warning,
}

impl StatusIcon {
    /// Tokens for the icon glyph.
    pub fn classes(self) -> TokenList {
        let color = match self {
            StatusIcon::Error => "text-destructive",
            StatusIcon::Success => "text-success",
            StatusIcon::Warning => "text-warning",
        };
        TokenList::from(split_tokens(&format!("h-4 w-4 {}", color)))
    }

    /// Tokens for the slot positioning the icon.
    pub fn slot_classes() -> TokenList {
        TokenList::from(split_tokens(ICON_SLOT))
    }
}

/// A label bound to its control by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelView {
    pub text: String,
    /// Id of the control this label describes.
    pub html_for: String,
    pub class: TokenList,
    /// Present for required fields.
    pub required_marker: Option<TokenList>,
}

/// A message rendered below the control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub text: String,
    pub class: TokenList,
}

/// The error block below the control: an icon next to the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    pub text: String,
    /// Row holding the icon and the message.
    pub container: TokenList,
    pub icon: TokenList,
    pub class: TokenList,
    /// Accessibility role of the message element.
    pub role: &'static str,
}

/// Everything a rendering surface needs to draw an input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    pub id: String,
    pub wrapper: TokenList,
    pub control: TokenList,
    pub label: Option<LabelView>,
    pub status_icon: Option<StatusIcon>,
    pub error: Option<ErrorView>,
    /// Only present when there is no error.
    pub helper_text: Option<MessageView>,
}

impl Input {
    /// Builds the full field view for `props` against `descriptor`.
    ///
    /// The id is the caller's when given, otherwise generated. An error
    /// takes precedence over the success and warning icons and hides the
    /// helper text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use variance::{Input, InputProps, InputVariant, Primitive, StatusIcon};
    ///
    /// let descriptor = Input::descriptor().unwrap();
    /// let props = InputProps::new()
    ///     .id("email")
    ///     .label("Email")
    ///     .variant(InputVariant::Success)
    ///     .error("Invalid address");
    /// let view = Input::view(&descriptor, &props);
    ///
    /// assert_eq!(view.id, "email");
    /// assert_eq!(view.status_icon, Some(StatusIcon::Error));
    /// assert!(view.control.contains("border-red-300"));
    /// assert!(view.helper_text.is_none());
    /// ```
    pub fn view(descriptor: &Descriptor, props: &InputProps) -> InputView {
        let id = ensure_identity(props.id.as_deref());
        let error = props.active_error();

        let label = props.label.as_ref().filter(|l| !l.is_empty()).map(|text| LabelView {
            text: text.clone(),
            html_for: id.clone(),
            class: TokenList::from(split_tokens(LABEL)),
            required_marker: props
                .required
                .then(|| TokenList::from(split_tokens(REQUIRED_MARKER))),
        });

        let status_icon = match (error, props.variant) {
            (Some(_), _) => Some(StatusIcon::Error),
            (None, Some(InputVariant::Success)) => Some(StatusIcon::Success),
            (None, Some(InputVariant::Warning)) => Some(StatusIcon::Warning),
            _ => None,
        };

        let helper_text = match error {
            Some(_) => None,
            None => props
                .helper_text
                .as_ref()
                .filter(|t| !t.is_empty())
                .map(|text| MessageView {
                    text: text.clone(),
                    class: TokenList::from(split_tokens(HELPER_TEXT)),
                }),
        };

        InputView {
            control: descriptor.resolve_props(props),
            wrapper: TokenList::from(split_tokens(WRAPPER)),
            label,
            status_icon,
            error: error.map(|text| ErrorView {
                text: text.to_string(),
                container: TokenList::from(split_tokens(ERROR_CONTAINER)),
                icon: TokenList::from(split_tokens(ERROR_ICON)),
                class: TokenList::from(split_tokens(ERROR_MESSAGE)),
                role: "alert",
            }),
            helper_text,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> Descriptor {
        Input::descriptor().unwrap()
    }

    #[test]
    fn test_input_enums_match_descriptor() {
        let descriptor = descriptor();
        let sizes: Vec<&str> = descriptor.axis("size").unwrap().value_names().collect();
        let typed: Vec<&str> = InputSize::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(sizes, typed);

        let variants: Vec<&str> = descriptor.axis("variant").unwrap().value_names().collect();
        let typed: Vec<&str> = InputVariant::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(variants, typed);
    }

    #[test]
    fn test_input_size_precedes_variant() {
        let tokens = descriptor().resolve_props(&InputProps::new().size(InputSize::Lg));
        let size_at = tokens.iter().position(|t| t == "h-12").unwrap();
        let variant_at = tokens.iter().position(|t| t == "border-gray-200").unwrap();
        assert!(size_at < variant_at);
    }

    #[test]
    fn test_error_forces_error_variant() {
        let props = InputProps::new()
            .variant(InputVariant::Success)
            .error("Required");
        let tokens = descriptor().resolve_props(&props);
        assert!(tokens.contains("border-red-300"));
        assert!(!tokens.contains("border-green-300"));
    }

    #[test]
    fn test_empty_error_does_not_force() {
        let props = InputProps::new().variant(InputVariant::Success).error("");
        assert!(props.forced().is_empty());
        let tokens = descriptor().resolve_props(&props);
        assert!(tokens.contains("border-green-300"));
    }

    #[test]
    fn test_view_generates_id_and_binds_label() {
        let view = Input::view(&descriptor(), &InputProps::new().label("Name").required(true));
        assert!(view.id.starts_with("input-"));
        let label = view.label.unwrap();
        assert_eq!(label.html_for, view.id);
        assert!(label.required_marker.unwrap().contains("text-red-500"));
    }

    #[test]
    fn test_view_without_label() {
        let view = Input::view(&descriptor(), &InputProps::new().label(""));
        assert!(view.label.is_none());
        assert!(view.status_icon.is_none());
    }

    #[test]
    fn test_view_helper_text_only_without_error() {
        let props = InputProps::new().helper_text("We never share it");
        let view = Input::view(&descriptor(), &props);
        assert_eq!(view.helper_text.unwrap().text, "We never share it");
        assert!(view.error.is_none());

        let view = Input::view(&descriptor(), &props.error("Too short"));
        assert!(view.helper_text.is_none());
        assert_eq!(view.error.unwrap().text, "Too short");
    }

    #[test]
    fn test_view_error_block() {
        let view = Input::view(&descriptor(), &InputProps::new().error("Required"));
        let error = view.error.unwrap();
        assert_eq!(error.container.to_string(), "mt-2 flex items-start space-x-2");
        assert!(error.icon.contains("text-destructive"));
        assert!(error.icon.contains("flex-shrink-0"));
        assert_eq!(error.class.to_string(), "text-sm text-destructive");
        assert_eq!(error.role, "alert");
    }

    #[test]
    fn test_view_warning_icon() {
        let view = Input::view(&descriptor(), &InputProps::new().variant(InputVariant::Warning));
        assert_eq!(view.status_icon, Some(StatusIcon::Warning));
        assert!(view.control.contains("border-amber-300"));
        assert!(StatusIcon::Warning.classes().contains("text-warning"));
    }

    #[test]
    fn test_view_class_goes_to_control() {
        let view = Input::view(&descriptor(), &InputProps::new().class("font-mono"));
        assert_eq!(view.control.tokens().last().unwrap(), "font-mono");
        assert!(!view.wrapper.contains("font-mono"));
    }

    #[test]
    fn test_view_serializes() {
        let view = Input::view(&descriptor(), &InputProps::new().id("q").error("bad"));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "q");
        assert_eq!(json["status_icon"], "error");
        assert_eq!(json["wrapper"][0], "w-full");
        assert_eq!(json["error"]["role"], "alert");
        assert_eq!(json["error"]["icon"][0], "h-4");
    }
}
