use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tolk_types::{AUTO_DETECT_CODE, AppEvent, Language, TranslationModel, ViewState};

/// Terminal surface: maps typed commands to intents and prints every
/// published snapshot. Keeps no state beyond the latest snapshot.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel_token: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut latest: ViewState<TranslationModel> = ViewState::Loading;

    println!("tolk - type text to translate, :help for commands");

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => return Ok(()),
            event = app_to_ui_rx.recv() => {
                if let AppEvent::StatePublished(state) = event? {
                    render(&state);
                    latest = state;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { return Ok(()) };
                if !handle_line(line.trim(), &latest, &ui_to_app_tx).await? {
                    return Ok(());
                }
            }
        }
    }
}

/// Returns false when the user asked to quit.
async fn handle_line(
    line: &str,
    latest: &ViewState<TranslationModel>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<bool> {
    match line {
        "" => {}
        ":quit" | ":q" => return Ok(false),
        ":help" => print_help(),
        ":swap" => ui_to_app_tx.send(AppEvent::SwapLanguages).await?,
        ":refresh" => ui_to_app_tx.send(AppEvent::RefreshLanguages).await?,
        ":langs" => match latest.loaded() {
            Some(model) => {
                for language in &model.languages {
                    println!("  {:<8} {}", language.code, language.name);
                }
            }
            None => println!("language catalog not loaded yet"),
        },
        _ => {
            if let Some(code) = line.strip_prefix(":src ") {
                send_language_change(code.trim(), true, latest, ui_to_app_tx).await?;
            } else if let Some(code) = line.strip_prefix(":tgt ") {
                send_language_change(code.trim(), false, latest, ui_to_app_tx).await?;
            } else if line.starts_with(':') {
                println!("unknown command: {line}");
            } else {
                ui_to_app_tx
                    .send(AppEvent::TextChanged(line.to_string()))
                    .await?;
                ui_to_app_tx.send(AppEvent::Search).await?;
            }
        }
    }
    Ok(true)
}

async fn send_language_change(
    code: &str,
    source: bool,
    latest: &ViewState<TranslationModel>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(model) = latest.loaded() else {
        println!("language catalog not loaded yet");
        return Ok(());
    };
    let Some(language) = find_language(model, code, source) else {
        println!("unknown language code: {code}");
        return Ok(());
    };
    let event = if source {
        AppEvent::SourceLanguageChanged(language)
    } else {
        AppEvent::TargetLanguageChanged(language)
    };
    ui_to_app_tx.send(event).await?;
    Ok(())
}

/// Resolve a typed code against the catalog; auto-detect only on the
/// source side.
fn find_language(model: &TranslationModel, code: &str, source: bool) -> Option<Language> {
    if source && (code == "auto" || code == AUTO_DETECT_CODE) {
        return Some(Language::auto_detect());
    }
    model
        .languages
        .iter()
        .find(|language| language.code == code)
        .cloned()
}

fn render(state: &ViewState<TranslationModel>) {
    match state {
        ViewState::Loading => println!("loading language catalog..."),
        ViewState::Error(cause) => println!("error: {cause}"),
        ViewState::DataLoaded(model) => {
            println!(
                "[{} -> {}] {} languages",
                model.source_language.code,
                model.target_language.code,
                model.languages.len()
            );
            if !model.translated_text.is_empty() {
                println!("{}", model.translated_text);
            }
        }
    }
}

fn print_help() {
    println!("  <text>        translate the line");
    println!("  :src <code>   set source language (auto for auto-detect)");
    println!("  :tgt <code>   set target language");
    println!("  :swap         swap source and target");
    println!("  :langs        list the language catalog");
    println!("  :refresh      reload the language catalog");
    println!("  :quit         exit");
}
