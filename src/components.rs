//! Yew view components for the wheel page.
//!
//! Everything here renders from props; engine state only reaches these
//! components through snapshots taken in `main.rs`.

use crate::hooks::use_validated_input;
use crate::utils::{parse_color_input, parse_number_input, to_count};
use number_wheel::palette::label_color;
use number_wheel::pool::winner_grid;
use number_wheel::{Label, NumberStyle, SpinDirection, TableSnapshot, WheelSettings};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WinnerTableProps {
    pub table: TableSnapshot,
    pub sections: u32,
    pub darkness: u32,
    pub font_size: f64,
    pub flash_color: AttrValue,
    pub bg_color: AttrValue,
}

/// Winners in draw order, ten to a row.
#[function_component(WinnerTable)]
pub fn winner_table(props: &WinnerTableProps) -> Html {
    let grid = winner_grid(&props.table.winners);

    let cell_html = |cell: &Option<(usize, Label)>| -> Html {
        match *cell {
            Some((index, label)) => {
                let background = if props.table.highlighted_cell == Some(index) {
                    &props.flash_color
                } else {
                    &props.bg_color
                };
                let color = label_color(label, props.sections, props.darkness);
                html! {
                    <td style={format!("background-color: {}; color: {};", background, color)}>
                        { label }
                    </td>
                }
            }
            None => html! { <td style={format!("background-color: {};", props.bg_color)}></td> },
        }
    };

    html! {
        <table id="winnersTable" class="winners-table"
               style={format!("--table-font-size: {}px;", props.font_size)}>
            <tbody>
                { grid.iter().map(|row| html! {
                    <tr>{ row.iter().map(&cell_html).collect::<Html>() }</tr>
                }).collect::<Html>() }
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
pub struct ControlBarProps {
    pub can_spin: bool,
    pub can_auto_spin: bool,
    pub remaining: usize,
    pub auto_spins_left: Option<u32>,
    pub on_spin: Callback<MouseEvent>,
    pub on_auto_spin: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
    pub on_settings: Callback<MouseEvent>,
}

#[function_component(ControlBar)]
pub fn control_bar(props: &ControlBarProps) -> Html {
    let status = match props.auto_spins_left {
        Some(left) => format!("{} numbers left, auto-spin: {} to go", props.remaining, left),
        None => format!("{} numbers left", props.remaining),
    };
    html! {
        <div class="controls">
            <button id="spinBtn" disabled={!props.can_spin} onclick={props.on_spin.clone()}>
                { "Spin" }
            </button>
            <button id="autoSpinBtn" disabled={!props.can_auto_spin} onclick={props.on_auto_spin.clone()}>
                { "Auto Spin" }
            </button>
            <button id="resetBtn" onclick={props.on_reset.clone()}>{ "Reset" }</button>
            <button id="settingsBtn" onclick={props.on_settings.clone()}>{ "Settings" }</button>
            <span class="status">{ status }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: f64,
    pub on_change: Callback<f64>,
}

#[function_component(NumberField)]
pub fn number_field(props: &NumberFieldProps) -> Html {
    let field_name = props.label.to_string();
    let parse: Rc<dyn Fn(&str) -> Result<f64, String>> =
        Rc::new(move |text: &str| parse_number_input(text, &field_name));
    let input = use_validated_input(props.value, parse, props.on_change.clone());
    let onchange = {
        let commit = input.on_commit.clone();
        Callback::from(move |_: Event| commit.emit(()))
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input type="text"
                id={props.id.clone()}
                value={input.text.clone()}
                oninput={input.on_text_input.clone()}
                {onchange}
            />
            if let Some(err) = &input.error {
                <div class="error-message">{ err }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ColorFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(ColorField)]
pub fn color_field(props: &ColorFieldProps) -> Html {
    let field_name = props.label.to_string();
    let parse: Rc<dyn Fn(&str) -> Result<String, String>> =
        Rc::new(move |text: &str| parse_color_input(text, &field_name));
    let input = use_validated_input(props.value.to_string(), parse, props.on_change.clone());
    let onchange = {
        let commit = input.on_commit.clone();
        Callback::from(move |_: Event| commit.emit(()))
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input type="color"
                id={props.id.clone()}
                value={input.text.clone()}
                oninput={input.on_text_input.clone()}
                {onchange}
            />
            if let Some(err) = &input.error {
                <div class="error-message">{ err }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub checked: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(CheckField)]
pub fn check_field(props: &CheckFieldProps) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_toggle.emit(input.checked());
        })
    };
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>
                <input type="checkbox" id={props.id.clone()} checked={props.checked} {onchange} />
                { props.label.clone() }
            </label>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChoiceFieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    /// (id, caption) per option.
    pub options: Vec<(AttrValue, AttrValue)>,
    pub selected: usize,
    pub on_select: Callback<usize>,
}

/// A group of radio buttons.
#[function_component(ChoiceField)]
pub fn choice_field(props: &ChoiceFieldProps) -> Html {
    html! {
        <div class="form-group">
            <span class="choice-label">{ props.label.clone() }</span>
            { props.options.iter().enumerate().map(|(i, (id, caption))| {
                let on_select = props.on_select.clone();
                let onchange = Callback::from(move |_: Event| on_select.emit(i));
                html! {
                    <label for={id.clone()}>
                        <input type="radio" id={id.clone()} name={props.name.clone()}
                            checked={props.selected == i} {onchange} />
                        { caption.clone() }
                    </label>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// Build a callback that edits one field of the settings draft.
fn update_draft<T: 'static>(
    draft: &UseStateHandle<WheelSettings>,
    apply: fn(&mut WheelSettings, T),
) -> Callback<T> {
    let draft = draft.clone();
    Callback::from(move |value: T| {
        let mut next = (*draft).clone();
        apply(&mut next, value);
        draft.set(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub current: WheelSettings,
    pub error: Option<AttrValue>,
    pub on_save: Callback<WheelSettings>,
    pub on_close: Callback<()>,
}

/// Settings form. Edits a draft copy; nothing changes until Save.
#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let current = props.current.clone();
    let draft = use_state(move || current);
    let d = (*draft).clone();

    let on_save = {
        let draft = draft.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit((*draft).clone()))
    };
    let on_restore_defaults = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.set(WheelSettings::default()))
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let direction_selected = match d.spin_direction {
        SpinDirection::Counterclockwise => 0,
        SpinDirection::Clockwise => 1,
    };
    let style_selected = match d.number_style {
        NumberStyle::Regular => 0,
        NumberStyle::Bold => 1,
    };

    html! {
        <div id="settingsPanel" class="settings-panel">
            <h3>{ "Wheel" }</h3>
            <NumberField id="sections" label="Sections" value={d.sections as f64}
                on_change={update_draft(&draft, |s, v: f64| s.sections = to_count(v))} />
            <NumberField id="maxSpeed" label="Max Speed" value={d.max_speed}
                on_change={update_draft(&draft, |s, v: f64| s.max_speed = v)} />
            <NumberField id="minSpins" label="Min Spins" value={d.min_spins as f64}
                on_change={update_draft(&draft, |s, v: f64| s.min_spins = to_count(v))} />
            <NumberField id="maxSpins" label="Max Spins" value={d.max_spins as f64}
                on_change={update_draft(&draft, |s, v: f64| s.max_spins = to_count(v))} />
            <NumberField id="deceleration" label="Deceleration" value={d.deceleration}
                on_change={update_draft(&draft, |s, v: f64| s.deceleration = v)} />
            <NumberField id="autoSpinCount" label="Auto Spin Count" value={d.auto_spin as f64}
                on_change={update_draft(&draft, |s, v: f64| s.auto_spin = to_count(v))} />
            <CheckField id="randomize" label="Shuffle numbers after each draw" checked={d.randomize}
                on_toggle={update_draft(&draft, |s, v: bool| s.randomize = v)} />
            <ChoiceField name="spinDirection" label="Spin Direction"
                options={vec![
                    (AttrValue::from("spinCounterclockwise"), AttrValue::from("Counterclockwise")),
                    (AttrValue::from("spinClockwise"), AttrValue::from("Clockwise")),
                ]}
                selected={direction_selected}
                on_select={update_draft(&draft, |s, i: usize| {
                    s.spin_direction = if i == 1 { SpinDirection::Clockwise } else { SpinDirection::Counterclockwise };
                })} />
            <CheckField id="randomSpinDirection" label="Random direction each spin"
                checked={d.random_spin_direction}
                on_toggle={update_draft(&draft, |s, v: bool| s.random_spin_direction = v)} />

            <h3>{ "Flash" }</h3>
            <CheckField id="flashAnimation" label="Flash the winner" checked={d.flash_animation}
                on_toggle={update_draft(&draft, |s, v: bool| s.flash_animation = v)} />
            <NumberField id="flashSpeed" label="Flash Speed (ms)" value={d.flash_speed as f64}
                on_change={update_draft(&draft, |s, v: f64| s.flash_speed = to_count(v))} />
            <NumberField id="flashCount" label="Flash Count" value={d.flash_count as f64}
                on_change={update_draft(&draft, |s, v: f64| s.flash_count = to_count(v))} />
            <ColorField id="flashColor" label="Flash Color" value={d.flash_color.clone()}
                on_change={update_draft(&draft, |s, v: String| s.flash_color = v)} />

            <h3>{ "Look" }</h3>
            <NumberField id="darkness" label="Darkness (1-10)" value={d.darkness as f64}
                on_change={update_draft(&draft, |s, v: f64| s.darkness = to_count(v))} />
            <NumberField id="wheelSize" label="Wheel Size" value={d.wheel_size}
                on_change={update_draft(&draft, |s, v: f64| s.wheel_size = v)} />
            <NumberField id="wheelFontSize" label="Wheel Font Size" value={d.wheel_font_size}
                on_change={update_draft(&draft, |s, v: f64| s.wheel_font_size = v)} />
            <NumberField id="tableFontSize" label="Table Font Size" value={d.table_font_size}
                on_change={update_draft(&draft, |s, v: f64| s.table_font_size = v)} />
            <ChoiceField name="numberStyle" label="Number Style"
                options={vec![
                    (AttrValue::from("numberRegular"), AttrValue::from("Regular")),
                    (AttrValue::from("numberBold"), AttrValue::from("Bold")),
                ]}
                selected={style_selected}
                on_select={update_draft(&draft, |s, i: usize| {
                    s.number_style = if i == 1 { NumberStyle::Bold } else { NumberStyle::Regular };
                })} />
            <NumberField id="centerCircleWidth" label="Center Circle Width" value={d.center_circle_width}
                on_change={update_draft(&draft, |s, v: f64| s.center_circle_width = v)} />
            <NumberField id="dotWidth" label="Dot Width" value={d.dot_width}
                on_change={update_draft(&draft, |s, v: f64| s.dot_width = v)} />
            <NumberField id="dotOffset" label="Dot Offset" value={d.dot_offset}
                on_change={update_draft(&draft, |s, v: f64| s.dot_offset = v)} />
            <NumberField id="borderThickness" label="Border Thickness" value={d.border_thickness}
                on_change={update_draft(&draft, |s, v: f64| s.border_thickness = v)} />
            <ColorField id="centerCircleColor" label="Center Circle Color" value={d.center_circle_color.clone()}
                on_change={update_draft(&draft, |s, v: String| s.center_circle_color = v)} />
            <ColorField id="dotColor" label="Dot Color" value={d.dot_color.clone()}
                on_change={update_draft(&draft, |s, v: String| s.dot_color = v)} />
            <ColorField id="borderColor" label="Border Color" value={d.border_color.clone()}
                on_change={update_draft(&draft, |s, v: String| s.border_color = v)} />
            <ColorField id="bgColor" label="Background Color" value={d.bg_color.clone()}
                on_change={update_draft(&draft, |s, v: String| s.bg_color = v)} />
            <ColorField id="numberColor" label="Number Color" value={d.number_color.clone()}
                on_change={update_draft(&draft, |s, v: String| s.number_color = v)} />

            if let Some(err) = &props.error {
                <div class="error-message">{ err.clone() }</div>
            }
            <div class="settings-buttons">
                <button id="saveSettings" onclick={on_save}>{ "Save" }</button>
                <button id="resetSettings" onclick={on_restore_defaults}>{ "Restore Defaults" }</button>
                <button id="closeSettings" onclick={on_close}>{ "Cancel" }</button>
            </div>
        </div>
    }
}
