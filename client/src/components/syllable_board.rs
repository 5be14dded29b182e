//! Interactive syllabary: pick a word, click syllables to hear them.

use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::data::{Syllable, WORDS, Word};

/// Play a pronunciation recording. Playback failures (missing file, autoplay
/// policy) are logged, never surfaced as errors.
fn play_audio(path: &'static str) {
    let Ok(audio) = web_sys::HtmlAudioElement::new_with_src(path) else {
        log::warn!("could not create audio element for {path}");
        return;
    };
    match audio.play() {
        Ok(promise) => {
            leptos::task::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("audio playback failed for {path}: {err:?}");
                }
            });
        }
        Err(err) => log::warn!("audio playback rejected for {path}: {err:?}"),
    }
}

fn syllabary(word: &'static Word) -> impl IntoView {
    let own: Vec<&str> = word.own_syllables().map(|s| s.text).collect();
    let summary = format!(
        "{} sílaba{}: {}",
        word.columns.len(),
        if word.columns.len() == 1 { "" } else { "s" },
        own.join(" - ")
    );

    let columns = word
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let own_text = column.first().map_or("", |s| s.text);
            let buttons = column
                .iter()
                .map(|syllable: &Syllable| {
                    let Syllable { text, audio } = *syllable;
                    view! {
                        <button
                            type="button"
                            class="syllabary__syllable"
                            class=("syllabary__syllable--own", text == own_text)
                            title=format!("Haz clic para escuchar: {text}")
                            on:click=move |_| play_audio(audio)
                        >
                            {text}
                        </button>
                    }
                })
                .collect_view();
            view! {
                <div class="syllabary__column">
                    <h4>{format!("Sílaba {}", index + 1)}</h4>
                    {buttons}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="syllabary">
            <div class="syllabary__summary">
                <h3>"Palabra: " <span class="syllabary__word">{word.word}</span></h3>
                <p>{summary}</p>
            </div>
            <div class="syllabary__columns">{columns}</div>
        </div>
    }
}

/// Word selector plus the syllabary for the selected word.
#[component]
pub fn SyllableBoard() -> impl IntoView {
    let selected = RwSignal::new(0_usize);

    let on_select = move |ev: leptos::ev::Event| {
        let name = event_target_value(&ev);
        if let Some(index) = WORDS.iter().position(|word| word.word == name) {
            selected.set(index);
        }
    };

    let options = WORDS
        .iter()
        .enumerate()
        .map(|(index, word)| {
            view! {
                <option value=word.word prop:selected=move || selected.get() == index>
                    {word.word}
                </option>
            }
        })
        .collect_view();

    let word_buttons = WORDS
        .iter()
        .enumerate()
        .map(|(index, word)| {
            view! {
                <button
                    type="button"
                    class="syllable-board__word"
                    class=("syllable-board__word--active", move || selected.get() == index)
                    on:click=move |_| selected.set(index)
                >
                    {word.word}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="syllable-board">
            <div class="syllable-board__picker">
                <label for="word-selector">"Selecciona una palabra:"</label>
                <select id="word-selector" on:change=on_select>
                    {options}
                </select>
                <p>"Palabras disponibles:"</p>
                <div class="syllable-board__words">{word_buttons}</div>
            </div>

            {move || syllabary(&WORDS[selected.get()])}

            <div class="syllable-board__help">
                <h3>"¿Cómo usar el silabario?"</h3>
                <ul>
                    <li>"La sílaba original de la palabra aparece resaltada"</li>
                    <li>"Haz clic en cualquier sílaba para escuchar su pronunciación"</li>
                    <li>"Las variaciones te ayudan a practicar con diferentes vocales"</li>
                    <li>"Combina sílabas de diferentes columnas para formar nuevas palabras"</li>
                </ul>
            </div>
        </div>
    }
}
