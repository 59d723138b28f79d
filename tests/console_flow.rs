//! Integration tests for end-to-end console flows against an in-memory session

use std::time::Duration;

use blitzseller::auth::Route;
use blitzseller::console::{run_line, Dashboard};
use blitzseller::types::Segment;
mod common;

async fn signed_in() -> (Dashboard, blitzseller::auth::SessionStore<blitzseller::storage::MemoryStore>) {
    let mut dash = Dashboard::new(Duration::ZERO);
    let mut session = common::memory_session();
    let out = run_line(&mut dash, &mut session, "LOGIN ana@bridge.com segredo").await;
    assert!(out.starts_with("Login realizado!"));
    (dash, session)
}

#[tokio::test]
async fn anonymous_viewer_is_redirected() {
    let mut dash = Dashboard::new(Duration::ZERO);
    let mut session = common::memory_session();
    for cmd in ["go dashboard", "stats", "leads", "stock", "segment door-to-door"] {
        let out = run_line(&mut dash, &mut session, cmd).await;
        assert_eq!(out, "Faça login para continuar.", "command {}", cmd);
    }
    assert_eq!(dash.route(), Route::Entry);
}

#[tokio::test]
async fn quest_progress_and_claim() {
    let (mut dash, mut session) = signed_in().await;

    let out = run_line(&mut dash, &mut session, "complete 1").await;
    assert_eq!(out, "Ainda faltam 3 para concluir.");

    let out = run_line(&mut dash, &mut session, "progress 1 10").await;
    assert!(out.contains("[5/5]"));
    let out = run_line(&mut dash, &mut session, "progress 1").await;
    assert_eq!(out, "Esta quest não aceita mais progresso.");

    let out = run_line(&mut dash, &mut session, "complete 1").await;
    assert_eq!(out, "Quest concluída!\nVocê ganhou 50 XP e 10 moedas!");
    let out = run_line(&mut dash, &mut session, "complete 1").await;
    assert_eq!(out, "Quest já concluída.");

    // Rewards are reported, the stored user is unchanged
    let user = session.current().unwrap();
    assert_eq!((user.xp, user.coins), (0, 50));
}

#[tokio::test]
async fn new_daily_quests_replace_old_ones() {
    let (mut dash, mut session) = signed_in().await;
    let out = run_line(&mut dash, &mut session, "newquests").await;
    assert!(out.contains("Fazer 3 ligações de prospecção"));
    assert!(out.contains("Enviar 5 propostas"));
    assert_eq!(dash.quests.daily_quests().len(), 2);
    assert_eq!(dash.quests.weekly_quests().len(), 2);
}

#[tokio::test]
async fn store_purchase_notices() {
    let (mut dash, mut session) = signed_in().await;

    let out = run_line(&mut dash, &mut session, "buy 8").await;
    assert_eq!(out, "Moedas insuficientes\nVocê precisa de 500 moedas para comprar este item.");
    assert!(dash.store.purchased().is_empty());

    let out = run_line(&mut dash, &mut session, "buy 2").await;
    assert_eq!(out, "Compra realizada!\nVocê comprou Quest Extra por 30 moedas.");
    let out = run_line(&mut dash, &mut session, "buy 2").await;
    assert_eq!(out, "Item já comprado\nVocê já possui este item.");

    let listing = run_line(&mut dash, &mut session, "store power-ups").await;
    assert!(listing.contains("Quest Extra - 30 moedas [Power-ups] (comprado)"));
    assert_eq!(session.current().unwrap().coins, 50);
}

#[tokio::test]
async fn ranking_marks_badges() {
    let (mut dash, mut session) = signed_in().await;
    let out = run_line(&mut dash, &mut session, "ranking sales").await;
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Ranking por Vendas");
    assert!(lines[1].starts_with("#1 Ana Silva"));
    assert!(lines[1].ends_with("[Top 3]"));
    assert!(lines[4].ends_with("[Top 10]"));
}

#[tokio::test]
async fn practice_round() {
    let (mut dash, mut session) = signed_in().await;
    let out = run_line(&mut dash, &mut session, "answer oi").await;
    assert_eq!(out, "Escolha um cenário com PRACTICE <id>.");

    run_line(&mut dash, &mut session, "practice 1").await;
    let out = run_line(&mut dash, &mut session, "answer").await;
    assert_eq!(out, "Digite uma resposta.");
    let out = run_line(&mut dash, &mut session, "answer Vamos falar do valor").await;
    assert!(out.contains("Você obteve 40 pontos neste cenário."));
    assert_eq!(dash.practice.completed().len(), 1);
}

#[tokio::test]
async fn crm_commands() {
    let (mut dash, mut session) = signed_in().await;
    let out = run_line(&mut dash, &mut session, "leads stage=negotiation").await;
    assert!(out.contains("Pedro Costa"));
    assert!(!out.contains("Maria Santos"));

    let out = run_line(
        &mut dash,
        &mut session,
        "addlead Carla Dias; Dias ME; carla@dias.com; 11 5555; 3200; Feira; Esportes, Música",
    )
    .await;
    assert_eq!(out, "Lead adicionado: Carla Dias (Prospecto) - R$ 3.200");
    let lead = dash.leads.leads().last().unwrap();
    assert_eq!(lead.interests.as_deref(), Some("Esportes, Música"));
    assert_eq!(lead.probability, 25);

    let out = run_line(&mut dash, &mut session, "golden").await;
    assert_eq!(out.lines().count(), 2);
}

#[tokio::test]
async fn inventory_commands() {
    let (mut dash, mut session) = signed_in().await;
    let out = run_line(&mut dash, &mut session, "adjust 2 -13").await;
    assert_eq!(out, "Estoque atualizado: 2 un.");
    let out = run_line(&mut dash, &mut session, "stock").await;
    assert!(out.contains("Estoque baixo: 1"));
    assert!(out.contains("Vida Saudável (Saúde) - 2 un. - R$ 20.00 [Estoque Baixo]"));

    let out = run_line(&mut dash, &mut session, "addbook Sem Preço; family; 4; 0").await;
    assert_eq!(out, "Informe um título e um preço maior que zero.");
    let out = run_line(&mut dash, &mut session, "addbook Lar Feliz; family; 4; 18; 9").await;
    assert_eq!(out, "Livro adicionado: Lar Feliz (4 un.)");
}

#[tokio::test]
async fn settings_require_primary_segment() {
    let (mut dash, mut session) = signed_in().await;
    let out = run_line(&mut dash, &mut session, "segment").await;
    assert_eq!(out, "Erro\nPor favor, selecione seu segmento primário de atuação");

    let out = run_line(&mut dash, &mut session, "segment door-to-door none Zona Sul").await;
    assert!(out.starts_with("Configurações salvas!"));
    let user = session.current().unwrap();
    assert_eq!(user.primary_segment, Some(Segment::DoorToDoor));
    assert_eq!(user.geographic_area.as_deref(), Some("Zona Sul"));
}

#[tokio::test]
async fn logout_returns_to_entry() {
    let (mut dash, mut session) = signed_in().await;
    run_line(&mut dash, &mut session, "go settings").await;
    assert_eq!(dash.route(), Route::Settings);
    let out = run_line(&mut dash, &mut session, "logout").await;
    assert_eq!(out, "Sessão encerrada.");
    assert_eq!(dash.route(), Route::Entry);
    let out = run_line(&mut dash, &mut session, "achievements").await;
    assert_eq!(out, "Faça login para continuar.");
}

#[tokio::test]
async fn analytics_page() {
    let (mut dash, mut session) = signed_in().await;
    let out = run_line(&mut dash, &mut session, "go analytics").await;
    assert!(out.contains("Receita Total: R$ 153.000 (+12.5% vs mês anterior)"));
    assert!(out.contains("Taxa de Conversão: 11.1% (-2.1% vs mês anterior)"));
    assert!(out.contains("Fechamento 11.1%"));
}

#[tokio::test]
async fn saving_segments_again_clears_secondary_and_area() {
    let (mut dash, mut session) = signed_in().await;
    run_line(&mut dash, &mut session, "segment door-to-door medical-business Zona Norte").await;
    let user = session.current().unwrap();
    assert_eq!(user.secondary_segment, Some(Segment::MedicalBusiness));
    assert_eq!(user.geographic_area.as_deref(), Some("Zona Norte"));

    let out = run_line(&mut dash, &mut session, "segment door-to-door none").await;
    assert!(out.starts_with("Configurações salvas!"));
    let user = session.current().unwrap();
    assert_eq!(user.primary_segment, Some(Segment::DoorToDoor));
    assert!(user.secondary_segment.is_none());
    assert!(user.geographic_area.is_none());

    let page = run_line(&mut dash, &mut session, "go settings").await;
    assert!(page.contains("Segmento secundário: Não configurado"));
    assert!(page.contains("Área: -"));
}

#[tokio::test]
async fn custom_interests_keep_every_entry() {
    let (mut dash, mut session) = signed_in().await;
    run_line(
        &mut dash,
        &mut session,
        "addlead Rui Alves; Alves ME; rui@alves.com; 11 4444; 900; Feira; Esportes, nenhuma das anteriores, pesca, caça",
    )
    .await;
    let lead = dash.leads.leads().last().unwrap();
    assert_eq!(lead.interests.as_deref(), Some("pesca, caça"));
}

#[tokio::test]
async fn login_password_may_contain_spaces() {
    let mut dash = Dashboard::new(Duration::ZERO);
    let mut session = common::memory_session();
    let out = run_line(&mut dash, &mut session, "LOGIN ana@bridge.com minha senha longa").await;
    assert!(out.starts_with("Login realizado!"));
    assert!(session.is_authenticated());
}
