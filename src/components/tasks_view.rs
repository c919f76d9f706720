use super::section_classes;
use crate::model::{Task, TaskId};
use crate::util::task_line;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TasksViewProps {
    pub visible: bool,
    pub tasks: Vec<Task>,
    pub complete: Callback<TaskId>,
}

#[function_component(TasksView)]
pub fn tasks_view(props: &TasksViewProps) -> Html {
    html! {
        <section id="dailyTasks" class={section_classes(props.visible)}>
            <h2>{"Daily Tasks"}</h2>
            <ul id="tasksList">
                { for props.tasks.iter().map(|task| {
                    // only claimable tasks get a button
                    let button = if task.can_complete() {
                        let cb = props.complete.clone();
                        let id = task.id.clone();
                        let onclick = Callback::from(move |_| cb.emit(id.clone()));
                        html! { <button {onclick}>{"Complete"}</button> }
                    } else {
                        html! {}
                    };
                    html! {
                        <li>
                            { task_line(&task.description, task.progress, task.target) }
                            { button }
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
