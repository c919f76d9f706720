use super::section_classes;
use crate::model::{PlayerState, UPGRADE_DEFS, UpgradeId};
use crate::util::shop_line;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShopViewProps {
    pub visible: bool,
    pub player: PlayerState,
    pub purchase: Callback<UpgradeId>,
}

/// Catalog rows with the player's owned counts. Affordability is checked on click.
#[function_component(ShopView)]
pub fn shop_view(props: &ShopViewProps) -> Html {
    html! {
        <section id="shop" class={section_classes(props.visible)}>
            <h2>{"Shop"}</h2>
            <ul id="upgradesList">
                { for UPGRADE_DEFS.iter().map(|def| {
                    let buy = {
                        let cb = props.purchase.clone();
                        let id = def.id;
                        Callback::from(move |_| cb.emit(id))
                    };
                    html! {
                        <li key={def.id.key()}>
                            { shop_line(def.name, props.player.owned(def.id), def.cost) }
                            <button onclick={buy}>{"Buy"}</button>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
