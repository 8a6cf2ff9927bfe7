pub mod state;

use contracts::domain::a001_contribuinte::aggregate::{ContribuinteRecord, CLIENT_NAME_MAX_LEN};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::{create_state, ContribuinteListState, QueryTicket};
use crate::shared::components::back_button::BackButton;
use crate::shared::date_utils::{format_naive_date, format_optional_date};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

type SetFilter = fn(&mut ContribuinteListState, &str) -> Option<QueryTicket>;

#[component]
pub fn ContribuinteList() -> impl IntoView {
    let state = create_state();

    // Issue the query behind a ticket and feed the reply back.
    let run = move |ticket: Option<QueryTicket>| {
        let Some(ticket) = ticket else {
            return;
        };
        spawn_local(async move {
            let outcome = ticket.query.execute().await;
            if let Err(e) = &outcome {
                log::error!("contribuinte query {:?} failed: {}", ticket.query, e);
            }
            let applied = state
                .try_update(|s| s.resolve(ticket.seq, outcome))
                .unwrap_or(false);
            if !applied {
                log::debug!("discarded stale reply #{}", ticket.seq);
            }
        });
    };

    let apply = move |set: SetFilter, value: String| {
        run(state.try_update(|s| set(s, &value)).flatten());
    };

    let rows = move || state.with(|s| s.records().to_vec());

    view! {
        <PageFrame page_id="a001_contribuinte--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <BackButton />
                <h1>"Contribuinte Management"</h1>
            </div>

            <div class="page__content">
                <div class="filter-section">
                    <div class="filter-field">
                        <label for="date-filter">"Process Date:"</label>
                        <input
                            id="date-filter"
                            type="date"
                            prop:value=move || state.with(|s| s.filter().date().to_string())
                            on:input=move |ev| apply(ContribuinteListState::set_date_filter as SetFilter, event_target_value(&ev))
                        />
                    </div>

                    <div class="filter-field">
                        <label for="tax-id-filter">"CPF/CNPJ:"</label>
                        <input
                            id="tax-id-filter"
                            type="text"
                            inputmode="numeric"
                            maxlength="14"
                            placeholder="Only digits"
                            prop:value=move || state.with(|s| s.filter().tax_id().to_string())
                            on:change=move |ev| apply(ContribuinteListState::set_tax_id_filter as SetFilter, event_target_value(&ev))
                        />
                    </div>

                    <div class="filter-field">
                        <label for="client-filter">"Client:"</label>
                        <input
                            id="client-filter"
                            type="text"
                            maxlength=CLIENT_NAME_MAX_LEN.to_string()
                            placeholder="Client name"
                            prop:value=move || state.with(|s| s.filter().client().to_string())
                            on:change=move |ev| apply(ContribuinteListState::set_client_filter as SetFilter, event_target_value(&ev))
                        />
                    </div>
                </div>

                {move || state.with(|s| s.error_message()).map(|e| view! {
                    <div class="error-message">{e}</div>
                })}

                <Show when=move || state.with(|s| s.is_loading())>
                    <div class="loading-message">"Loading..."</div>
                </Show>

                {move || state.with(|s| s.summary()).map(|text| view! {
                    <div class="results-info">{text}</div>
                })}

                <Show when=move || state.with(|s| !s.records().is_empty())>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                <TableHeaderCell>"Process Date"</TableHeaderCell>
                                <TableHeaderCell>"CPF/CNPJ"</TableHeaderCell>
                                <TableHeaderCell>"Client"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Registration Date"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=rows
                                key=|r: &ContribuinteRecord| r.ref_id
                                children=move |r: ContribuinteRecord| view! { <RecordRow record=r /> }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn RecordRow(record: ContribuinteRecord) -> impl IntoView {
    let email = record.email_display().to_string();
    view! {
        <TableRow>
            <TableCell>{record.ref_id}</TableCell>
            <TableCell>{format_naive_date(record.dat_proce)}</TableCell>
            <TableCell>{record.cpf_cnpj}</TableCell>
            <TableCell>{record.cliente}</TableCell>
            <TableCell>{email}</TableCell>
            <TableCell>{format_optional_date(record.dat_cadastro)}</TableCell>
        </TableRow>
    }
}
