//! The table listing every transaction.

use maud::{Markup, html};

use crate::{
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
    transaction::{DisplayTransaction, TransactionType},
};

const TABLE_CELL_GREEN_STYLE: &str = "text-green-600 dark:text-green-400";
const TABLE_CELL_RED_STYLE: &str = "text-red-600 dark:text-red-400";

fn value_color_class(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => TABLE_CELL_GREEN_STYLE,
        TransactionType::Outcome => TABLE_CELL_RED_STYLE,
    }
}

fn transaction_row(transaction: &DisplayTransaction) -> Markup {
    let record = &transaction.record;
    let transaction_type = record.transaction_type;
    let value_style = format!(
        "{TABLE_CELL_STYLE} {} {} tabular-nums whitespace-nowrap",
        transaction_type.as_str(),
        value_color_class(transaction_type)
    );

    html!(
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(record.id)
        {
            td class={(TABLE_CELL_STYLE) " title font-medium text-gray-900 dark:text-white"}
            {
                (record.title)
            }

            td class=(value_style)
            {
                (transaction.formatted_value)
            }

            td class=(TABLE_CELL_STYLE)
            {
                (record.category.title)
            }

            td class=(TABLE_CELL_STYLE)
            {
                time datetime=(transaction.local_date) { (transaction.formatted_date) }
            }
        }
    )
}

/// Renders the transactions in the order given.
pub(super) fn transactions_table_view(transactions: &[DisplayTransaction]) -> Markup {
    html!(
        section class="w-full mt-16 overflow-x-auto"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Título" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Preço" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Categoria" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Data" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }

                    @if transactions.is_empty() {
                        tr
                        {
                            td
                                colspan="4"
                                class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                            {
                                "Nenhuma transação encontrada."
                            }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use time::macros::datetime;

    use crate::{
        test_utils::{sample_response, select_all_text},
        transaction::append_transactions,
    };

    use super::transactions_table_view;

    fn render_sample() -> Html {
        let transactions =
            append_transactions(Vec::new(), sample_response().transactions, "Etc/UTC").unwrap();

        Html::parse_fragment(&transactions_table_view(&transactions).into_string())
    }

    #[test]
    fn has_expected_columns() {
        let html = render_sample();

        assert_eq!(
            select_all_text(&html, "thead th"),
            vec!["Título", "Preço", "Categoria", "Data"]
        );
    }

    #[test]
    fn renders_one_row_per_transaction_in_order() {
        let html = render_sample();

        assert_eq!(
            select_all_text(&html, "tbody td.title"),
            vec!["Desenvolvimento de site", "Hamburguer"]
        );
        assert_eq!(
            select_all_text(&html, "tbody td:nth-child(3)"),
            vec!["Vendas", "Alimentação"]
        );
        assert_eq!(
            select_all_text(&html, "tbody time"),
            vec!["24/05/2020", "20/05/2020"]
        );
    }

    #[test]
    fn date_attribute_matches_displayed_local_date() {
        let mut records = sample_response().transactions;
        records.truncate(1);
        records[0].created_at = datetime!(2020-05-24 01:30 UTC);
        let transactions = append_transactions(Vec::new(), records, "America/Sao_Paulo").unwrap();

        let html = Html::parse_fragment(&transactions_table_view(&transactions).into_string());
        let selector = Selector::parse("tbody time").unwrap();
        let time = html.select(&selector).next().unwrap();

        assert_eq!(time.value().attr("datetime"), Some("2020-05-23"));
        assert_eq!(time.text().collect::<String>(), "23/05/2020");
    }

    #[test]
    fn value_cell_is_classed_by_type() {
        let html = render_sample();

        assert_eq!(select_all_text(&html, "td.income"), vec!["R$ 5.000,00"]);
        assert_eq!(select_all_text(&html, "td.outcome"), vec!["- R$ 59,90"]);
    }

    #[test]
    fn rows_carry_transaction_id() {
        let html = render_sample();
        let selector = Selector::parse("tbody tr").unwrap();

        let ids: Vec<_> = html
            .select(&selector)
            .filter_map(|row| row.value().attr("data-transaction-id"))
            .collect();

        assert_eq!(
            ids,
            vec![
                "0b5f1c1e-1f6a-4d5c-9a57-2b7f1e0d6a11",
                "7c3d2a9b-5e8f-4b1a-8c6d-3e2f1a0b9c22"
            ]
        );
    }

    #[test]
    fn shows_message_when_empty() {
        let html = Html::parse_fragment(&transactions_table_view(&[]).into_string());

        assert_eq!(
            select_all_text(&html, "tbody td"),
            vec!["Nenhuma transação encontrada."]
        );
    }
}
