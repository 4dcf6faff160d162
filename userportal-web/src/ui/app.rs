use userportal_client::{
    api::{Task, TaskId},
    demo_tasks,
};
use yew::prelude::*;

use crate::{ui, LoginInfo};

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
    pub login: LoginInfo,
    pub on_logout: Callback<()>,
}

pub enum AppMsg {
    SelectTask(TaskId),
    BackToList,
    Logout,
}

pub struct App {
    tasks: Vec<Task>,
    selected: Option<TaskId>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            tasks: demo_tasks(),
            selected: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::SelectTask(id) => self.selected = Some(id),
            AppMsg::BackToList => self.selected = None,
            AppMsg::Logout => {
                ctx.props().on_logout.emit(());
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match self.selected {
            None => html! {
                <ui::TaskList
                    tasks={self.tasks.clone()}
                    on_select={ctx.link().callback(AppMsg::SelectTask)}
                />
            },
            Some(id) => match self.tasks.iter().find(|t| t.id == id) {
                Some(task) => html! {
                    <ui::TaskDetails
                        task={task.clone()}
                        login={ctx.props().login.clone()}
                        on_back={ctx.link().callback(|()| AppMsg::BackToList)}
                    />
                },
                None => html! {
                    <div class="text-center">
                        <h1>{ "Task Not Found" }</h1>
                        <p>{ "The task you're looking for doesn't exist." }</p>
                        <button onclick={ctx.link().callback(|_| AppMsg::BackToList)}>
                            { "← Back to Tasks" }
                        </button>
                    </div>
                },
            },
        };
        html! {
            <div class="container">
                <header class="d-flex justify-content-between">
                    <h1>{ "UserPortal" }</h1>
                    <div>
                        <span class="me-2">{ &ctx.props().login.username }</span>
                        <button
                            class="btn btn-outline-secondary"
                            onclick={ctx.link().callback(|_| AppMsg::Logout)}
                        >
                            { "Logout" }
                        </button>
                    </div>
                </header>
                { body }
            </div>
        }
    }
}
