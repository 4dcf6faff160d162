use userportal_client::api::{Task, TaskId, TaskStatus};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    pub on_select: Callback<TaskId>,
}

fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "badge bg-warning",
        TaskStatus::InProgress => "badge bg-primary",
        TaskStatus::Completed => "badge bg-success",
    }
}

#[function_component(TaskList)]
pub fn task_list(p: &TaskListProps) -> Html {
    let items = p.tasks.iter().map(|t| {
        let on_select = {
            let id = t.id;
            p.on_select.reform(move |_| id)
        };
        html! {
            <li class="list-group-item" onclick={on_select}>
                <div class="d-flex justify-content-between">
                    <div>
                        <p class="fw-bold mb-0">{ &t.title }</p>
                        <p class="text-muted mb-0">{ &t.description }</p>
                    </div>
                    <div class="text-end">
                        <p class="mb-0">{ &t.assignee }</p>
                        <p class="text-muted mb-1">{ t.due_date.to_string() }</p>
                        <span class={status_class(t.status)}>{ t.status.to_string() }</span>
                    </div>
                </div>
            </li>
        }
    });
    html! {
        <>
            <h2>{ "My Tasks" }</h2>
            <ul class="list-group">
                { for items }
            </ul>
        </>
    }
}
