use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    badge: AttrValue,
    title: AttrValue,
    info: AttrValue,
    features: Vec<&'static str>,
    to: Route,
    action: AttrValue,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <article class="modern-card">
            <div class="card-inner">
                <span class="card-pricing"><span>{ props.badge.clone() }</span></span>
                <p class="card-title">{ props.title.clone() }</p>
                <p class="card-info">{ props.info.clone() }</p>
                <ul class="card-features">
                    {
                        for props.features.iter().map(|feature| html! {
                            <li>
                                <span class="icon">{"✓"}</span>
                                <span>{ *feature }</span>
                            </li>
                        })
                    }
                </ul>
                <div class="card-action">
                    <Link<Route> to={props.to.clone()} classes="card-button">
                        { props.action.clone() }
                    </Link<Route>>
                </div>
            </div>
        </article>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="space-y-8">
            <section>
                <h1 class="text-2xl font-semibold text-gray-900 sm:text-3xl">
                    {"YouTube チャンネル解析ダッシュボード"}
                </h1>
                <p class="mt-2 text-sm text-gray-500 sm:text-base">
                    {"チャンネルの成長や動画のパフォーマンスを可視化するためのダッシュボードです。"}
                </p>
            </section>

            <section class="grid gap-8 grid-cols-1 md:grid-cols-2">
                <FeatureCard
                    badge="新規"
                    title="チャンネルを登録"
                    info="YouTubeチャンネルを登録して、動画のパフォーマンスを分析できます。"
                    features={vec!["チャンネル情報の自動取得", "動画データの分析", "パフォーマンス可視化"]}
                    to={Route::ChannelImport}
                    action="チャンネルを取り込む"
                />
                <FeatureCard
                    badge="一覧"
                    title="チャンネル一覧"
                    info="登録済みのチャンネル一覧を確認し、詳細情報や動画一覧を閲覧できます。"
                    features={vec!["登録済みチャンネルの確認", "詳細情報の閲覧", "動画一覧へのアクセス"]}
                    to={Route::Channels}
                    action="チャンネル一覧を見る"
                />
            </section>
        </div>
    }
}
