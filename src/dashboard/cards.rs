//! Card components for the income, outcome and total figures.

use maud::{Markup, html};

use crate::balance::BalanceView;

const CARD_STYLE: &str = "rounded-lg px-8 py-6 shadow-md bg-white text-gray-700 \
    dark:bg-gray-800 dark:text-gray-200";
const TOTAL_CARD_STYLE: &str = "rounded-lg px-8 py-6 shadow-md bg-orange-400 text-white";

/// One of the three summary cards.
struct Card<'a> {
    label: &'a str,
    icon: &'a str,
    test_id: &'a str,
    value: Option<&'a str>,
    is_total: bool,
}

impl Card<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_total {
            TOTAL_CARD_STYLE
        } else {
            CARD_STYLE
        };

        html!(
            div class=(style)
            {
                header class="flex items-center justify-between"
                {
                    p { (self.label) }
                    span aria-hidden="true" class="text-2xl" { (self.icon) }
                }

                h1
                    data-testid=(self.test_id)
                    class="mt-4 text-4xl font-medium leading-tight tabular-nums"
                {
                    @if let Some(value) = self.value {
                        (value)
                    }
                }
            }
        )
    }
}

/// Renders the income, outcome and total cards.
///
/// The cards are rendered without figures until a balance has been loaded.
pub(super) fn balance_cards_view(balance: Option<&BalanceView>) -> Markup {
    let cards = [
        Card {
            label: "Entradas",
            icon: "↑",
            test_id: "balance-income",
            value: balance.map(|balance| balance.income.as_str()),
            is_total: false,
        },
        Card {
            label: "Saídas",
            icon: "↓",
            test_id: "balance-outcome",
            value: balance.map(|balance| balance.outcome.as_str()),
            is_total: false,
        },
        Card {
            label: "Total",
            icon: "$",
            test_id: "balance-total",
            value: balance.map(|balance| balance.total.as_str()),
            is_total: true,
        },
    ];

    html!(
        section class="grid grid-cols-1 md:grid-cols-3 gap-8 w-full -mt-16"
        {
            @for card in cards {
                (card.into_html())
            }
        }
    )
}
