use leptos::prelude::*;
use restsec_core::content::{
    ABAC, BEST_PRACTICES, COMPARISON, CONCLUSION, JWT_DIAGRAM, JWT_LABELS, JWT_TOKEN_SEGMENTS,
    PROS_CONS, SECURITY_FLOWS,
};

use crate::components::abac::AbacDiagram;
use crate::components::callout::CallOutBlock;
use crate::components::code_examples::CodeExamples;
use crate::components::comparison::ComparisonCards;
use crate::components::flows::SecurityFlowList;
use crate::components::grid_list::GridListSection;
use crate::components::hero::Hero;
use crate::components::jwt_diagram::JwtDiagramSection;
use crate::components::pros_cons::ProsConsTable;
use crate::components::reveal::Reveal;
use crate::components::section::Divider;
use crate::components::simulator::SecuritySimulator;

/// The whole guide on one scrolling page. Section ids match the nav anchors.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Hero />
        <main class="max-w-5xl mx-auto px-6 pb-24">
            <Reveal id="flow" class="scroll-mt-24 my-16">
                <SecuritySimulator />
            </Reveal>
            <Divider />
            <Reveal id="concepts" class="scroll-mt-24 my-16">
                <ComparisonCards comparison=&COMPARISON />
            </Reveal>
            <Divider />
            <Reveal class="my-16">
                <GridListSection list=&BEST_PRACTICES />
            </Reveal>
            <Divider />
            <Reveal id="jwt" class="scroll-mt-24 my-16">
                <JwtDiagramSection diagram=&JWT_DIAGRAM token=&JWT_TOKEN_SEGMENTS labels=&JWT_LABELS />
            </Reveal>
            <Divider />
            <Reveal id="sequence" class="scroll-mt-24 my-16">
                <SecurityFlowList flows=&SECURITY_FLOWS />
            </Reveal>
            <Divider />
            <Reveal class="my-16">
                <ProsConsTable table=&PROS_CONS />
            </Reveal>
            <Divider />
            <Reveal id="conclusion" class="scroll-mt-24 my-16">
                <CallOutBlock callout=&CONCLUSION />
            </Reveal>
            <Divider />
            <Reveal id="abac" class="scroll-mt-24 my-16">
                <AbacDiagram abac=&ABAC />
            </Reveal>
            <Divider />
            <Reveal id="csharp" class="scroll-mt-24 my-16">
                <CodeExamples />
            </Reveal>
        </main>
    }
}
