use yew::prelude::*;
use hangman_shared::reconciler::{KeyState, LetterKey};

#[derive(Properties, PartialEq)]
pub struct KeyboardProps {
    pub keys: Vec<LetterKey>,
    pub busy: bool,
    pub on_key_press: Callback<char>,
}

#[function_component(Keyboard)]
pub fn keyboard(props: &KeyboardProps) -> Html {
    let rows = props.keys.chunks(9);

    html! {
        <div class="keyboard mt-6 w-full">
            { for rows.map(|row| html! {
                <div class="flex justify-center mb-2 w-full">
                    { for row.iter().map(|key| {
                        let status_class = match key.state {
                            KeyState::Hit => "bg-green-500 text-black",
                            KeyState::Miss => "bg-red-300 dark:bg-red-400 text-black dark:text-black",
                            KeyState::Unused => "bg-gray-200 dark:bg-gray-700 text-gray-900 dark:text-white",
                        };
                        let disabled = !key.enabled || props.busy;
                        let letter = key.letter;
                        let on_key_press = props.on_key_press.clone();

                        html! {
                            <button
                                type="button"
                                class={classes!(
                                    "w-8", "h-10", "sm:w-10", "sm:h-12",
                                    "flex", "items-center", "justify-center",
                                    "text-sm", "sm:text-base", "font-bold",
                                    "rounded", "mx-0.5",
                                    if disabled { "opacity-60 cursor-not-allowed" } else { "cursor-pointer" },
                                    status_class
                                )}
                                {disabled}
                                onclick={Callback::from(move |_| on_key_press.emit(letter))}
                            >
                                { letter }
                            </button>
                        }
                    }) }
                </div>
            }) }
        </div>
    }
}
