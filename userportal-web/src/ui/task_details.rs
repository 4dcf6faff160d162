use userportal_client::api::Task;
use yew::prelude::*;

use crate::{ui, LoginInfo};

#[derive(Clone, PartialEq, Properties)]
pub struct TaskDetailsProps {
    pub task: Task,
    pub login: LoginInfo,
    pub on_back: Callback<()>,
}

#[function_component(TaskDetails)]
pub fn task_details(p: &TaskDetailsProps) -> Html {
    let t = &p.task;
    html! {
        <>
            <button
                class="btn btn-link"
                onclick={p.on_back.reform(|_| ())}
            >
                { "← Back to Tasks" }
            </button>
            <div class="card mb-4">
                <div class="card-header d-flex justify-content-between">
                    <span>{ t.status.to_string() }</span>
                    <span class="font-monospace">{ format!("TASK #{:03}", t.id.0) }</span>
                </div>
                <div class="card-body">
                    <h1>{ &t.title }</h1>
                    <h3>{ "Description" }</h3>
                    <p>{ &t.description }</p>
                </div>
                <div class="card-footer d-flex justify-content-between">
                    <div>
                        <p class="text-muted mb-0">{ "Assignee" }</p>
                        <p class="fw-bold">{ &t.assignee }</p>
                    </div>
                    <div>
                        <p class="text-muted mb-0">{ "Due Date" }</p>
                        <p class="fw-bold">{ t.due_date.to_string() }</p>
                    </div>
                </div>
            </div>
            <ui::CommentSection login={p.login.clone()} task_id={t.id} />
        </>
    }
}
