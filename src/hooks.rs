use std::fmt::Display;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Text state and callbacks for one settings field.
#[derive(Clone)]
pub struct ValidatedInput {
    /// The current text content of the input field.
    pub text: String,
    /// Why the last commit was refused, if it was.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event. Updates the internal text state.
    pub on_text_input: Callback<InputEvent>,
    /// Parse the current text and, when valid, hand the value to `on_valid`.
    /// Wired to `onchange`, which fires on blur or Enter.
    pub on_commit: Callback<()>,
}

/// Keeps the raw text of a field separate from the value it stands for.
///
/// The parent owns `value`; this hook only shows it, lets the user edit the
/// text, and reports a parsed value back through `on_valid`. When `value`
/// changes from outside (restoring defaults) the text follows it.
#[hook]
pub fn use_validated_input<T>(
    value: T,
    parse: Rc<dyn Fn(&str) -> Result<T, String>>,
    on_valid: Callback<T>,
) -> ValidatedInput
where
    T: Clone + PartialEq + Display + 'static,
{
    let text_handle: UseStateHandle<String> = use_state(|| value.to_string());
    let error_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let on_commit = {
        let current_text = text_handle.clone();
        let error_setter = error_handle.clone();
        Callback::from(move |_: ()| match parse(current_text.as_str()) {
            Ok(parsed) => {
                // Canonical form, e.g. " 12 " becomes "12".
                current_text.set(parsed.to_string());
                error_setter.set(None);
                on_valid.emit(parsed);
            }
            Err(msg) => error_setter.set(Some(msg)),
        })
    };

    {
        let text_setter = text_handle.clone();
        let error_setter = error_handle.clone();
        use_effect_with(value, move |current| {
            let formatted = current.to_string();
            if *text_setter != formatted {
                text_setter.set(formatted);
                error_setter.set(None);
            }
            || ()
        });
    }

    ValidatedInput {
        text: (*text_handle).clone(),
        error: (*error_handle).clone(),
        on_text_input,
        on_commit,
    }
}
