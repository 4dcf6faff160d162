use yew::prelude::*;

use crate::LoginInfo;

#[derive(Clone, PartialEq, Properties)]
pub struct LoginProps {
    pub on_submit: Callback<LoginInfo>,
}

pub struct Login {
    host: String,
    username: String,
}

pub enum LoginMsg {
    HostChanged(String),
    UsernameChanged(String),
    SubmitClicked,
}

impl Component for Login {
    type Message = LoginMsg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            host: String::new(),
            username: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginMsg::HostChanged(h) => self.host = h,
            LoginMsg::UsernameChanged(u) => self.username = u,
            LoginMsg::SubmitClicked => {
                let username = self.username.trim();
                if !username.is_empty() {
                    ctx.props().on_submit.emit(LoginInfo {
                        host: self.host.trim().trim_end_matches('/').to_owned(),
                        username: String::from(username),
                    });
                }
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        macro_rules! callback_for {
            ($msg:ident) => {
                ctx.link().callback(|e: web_sys::Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    LoginMsg::$msg(input.value())
                })
            };
        }
        html! {
            <form>
                <h1>{ "UserPortal" }</h1>
                <p>{ "Enter your username to get started" }</p>
                <div class="form-group">
                    <label for="host">{ "Host" }</label>
                    <input
                        type="url"
                        class="form-control"
                        id="host"
                        placeholder="http://localhost:3000 (empty for same origin)"
                        onchange={callback_for!(HostChanged)}
                    />
                </div>
                <div class="form-group">
                    <label for="username">{ "Username" }</label>
                    <input
                        type="text"
                        class="form-control"
                        id="username"
                        placeholder="Enter your username"
                        onchange={callback_for!(UsernameChanged)}
                    />
                </div>
                <button
                    type="submit"
                    class="btn btn-primary"
                    onclick={ctx.link().callback(|_| LoginMsg::SubmitClicked)}
                >
                    { "Sign in" }
                </button>
            </form>
        }
    }
}
