use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ImportPageProps {
    pub api_client: ApiClient,
    pub on_done: Callback<()>,
}

/// Upload screen: picks a CSV file and hands it to the ledger service.
/// Parsing happens server-side; this page only ships the bytes.
#[function_component(ImportPage)]
pub fn import_page(props: &ImportPageProps) -> Html {
    let selected_file = use_state(|| Option::<web_sys::File>::None);
    let uploading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let on_file_change = {
        let selected_file = selected_file.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            selected_file.set(input.files().and_then(|files| files.get(0)));
            error.set(None);
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let on_done = props.on_done.clone();
        let selected_file = selected_file.clone();
        let uploading = uploading.clone();
        let error = error.clone();

        Callback::from(move |_: MouseEvent| {
            let file = match (*selected_file).clone() {
                Some(file) => file,
                None => {
                    error.set(Some("Selecione um arquivo CSV".to_string()));
                    return;
                }
            };

            let api_client = api_client.clone();
            let on_done = on_done.clone();
            let uploading = uploading.clone();
            let error = error.clone();

            spawn_local(async move {
                uploading.set(true);

                match api_client.import_transactions(&file).await {
                    Ok(()) => on_done.emit(()),
                    Err(message) => error.set(Some(message)),
                }

                uploading.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <section class="import-section">
                <h2>{"Importar uma transação"}</h2>
                <input type="file" accept=".csv" onchange={on_file_change} />
                {if let Some(file) = &*selected_file {
                    html! { <p class="file-name">{file.name()}</p> }
                } else {
                    html! {}
                }}
                {if let Some(message) = &*error {
                    html! { <p class="error">{message}</p> }
                } else {
                    html! {}
                }}
                <footer>
                    <p>{"Permitido apenas arquivos CSV"}</p>
                    <button onclick={on_submit} disabled={*uploading}>
                        {if *uploading { "Enviando..." } else { "Enviar" }}
                    </button>
                </footer>
            </section>
        </div>
    }
}
