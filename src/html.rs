use maud::{DOCTYPE, Markup, html};

use crate::endpoints;

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

/// Stylesheet and htmx build served from the `static/` directory.
const STYLESHEET_PATH: &str = "/static/main.css";
const HTMX_PATH: &str = "/static/htmx-2.0.8-min.js";

/// The document shell shared by every page, titled "`title` - GoFinances".
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - GoFinances" }
                link href=(STYLESHEET_PATH) rel="stylesheet";
                script src=(HTMX_PATH) {}
            }

            body class="min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

/// A full page explaining an HTTP error, with a way back to the dashboard.
pub fn error_view(title: &str, status_code: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        main class="max-w-screen-sm px-4 py-16 mx-auto text-center text-gray-900 dark:text-white"
        {
            h1 class="mb-4 text-7xl font-extrabold text-blue-600 dark:text-blue-500"
            {
                (status_code)
            }

            p class="mb-4 text-3xl font-bold" { (description) }
            p class="mb-8 text-xl" { (fix) }

            (link(endpoints::DASHBOARD_VIEW, "Voltar para a listagem"))
        }
    );

    base(title, &content)
}

/// A link with blue text.
pub fn link(url: &str, text: &str) -> Markup {
    html!(
        a href=(url) class=(LINK_STYLE) { (text) }
    )
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline text-blue-600 w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// An alert box for telling the user that something went wrong.
pub fn error_alert(title: &str, details: &str) -> Markup {
    // Template adapted from https://flowbite.com/docs/components/alerts/
    html!(
        div
            role="alert"
            data-testid="load-error"
            class="w-full p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50
                dark:bg-gray-800 dark:text-red-400"
        {
            span class="font-medium" { (title) }
            " "
            (details)
        }
    )
}
