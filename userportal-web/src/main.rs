use gloo_storage::{LocalStorage, Storage};
use lazy_static::lazy_static;
use yew::prelude::*;

mod api;
mod ui;

lazy_static! {
    pub static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

/// Login is a local-storage stub: the username is stored client-side and
/// sent along unverified with each posted comment.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LoginInfo {
    /// Server base URL; empty means same-origin
    pub host: String,
    pub username: String,
}

enum MainMsg {
    UserLogin(LoginInfo),
    UserLogout,
}

struct Main {
    login: Option<LoginInfo>,
}

impl Component for Main {
    type Message = MainMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Main {
            login: LocalStorage::get("login").ok(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::UserLogin(login) => {
                LocalStorage::set("login", &login)
                    .expect("failed saving login info to LocalStorage");
                self.login = Some(login);
            }
            MainMsg::UserLogout => {
                LocalStorage::delete("login");
                self.login = None;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.login {
            None => html! {
                <div class="container">
                    <ui::Login on_submit={ctx.link().callback(MainMsg::UserLogin)} />
                </div>
            },
            Some(login) => html! {
                <ui::App
                    login={login.clone()}
                    on_logout={ctx.link().callback(|()| MainMsg::UserLogout)}
                />
            },
        }
    }
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<Main>::new().render();
}
