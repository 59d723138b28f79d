//! Starter records for the in-memory containers. Each console session begins
//! from these lists.

use chrono::{Duration, NaiveDate, Utc};

use crate::types::{
    Achievement, AchievementCategory, Difficulty, InventoryCategory, InventoryItem,
    LeaderboardUser, Lead, LeadStage, ObjectionCategory, Quest, QuestCategory, QuestType,
    RejectionScenario, SalesTechnique, ScenarioDifficulty, StoreCategory, StoreItem,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn starter_quests() -> Vec<Quest> {
    vec![
        Quest::new(
            "1",
            "Prospectar 5 novos clientes",
            "Encontre e registre 5 novos prospects no CRM",
            QuestType::Daily,
            Difficulty::Easy,
            QuestCategory::Prospecting,
            5,
        )
        .with_rewards(50, 10)
        .with_progress(2),
        Quest::new(
            "2",
            "Realizar 10 ligações",
            "Faça 10 ligações de follow-up para leads quentes",
            QuestType::Daily,
            Difficulty::Medium,
            QuestCategory::Calls,
            10,
        )
        .with_rewards(80, 15)
        .with_progress(4),
        Quest::new(
            "3",
            "Agendar 3 reuniões",
            "Marque 3 reuniões presenciais nesta semana",
            QuestType::Weekly,
            Difficulty::Medium,
            QuestCategory::Meetings,
            3,
        )
        .with_rewards(150, 30)
        .with_progress(1),
        Quest::new(
            "4",
            "Fechar 2 vendas",
            "Converta 2 propostas em vendas fechadas",
            QuestType::Weekly,
            Difficulty::Hard,
            QuestCategory::Closing,
            2,
        )
        .with_rewards(300, 60),
        Quest::new(
            "5",
            "Cliente dourado",
            "Feche uma venda com um cliente dourado",
            QuestType::Special,
            Difficulty::Hard,
            QuestCategory::Closing,
            1,
        )
        .with_rewards(500, 100),
    ]
}

/// The two quests handed out by "Gerar Novas Quests".
pub fn fresh_daily_quests() -> Vec<Quest> {
    vec![
        Quest::new(
            &uuid::Uuid::new_v4().to_string(),
            "Fazer 3 ligações de prospecção",
            "Entre em contato com 3 novos prospects hoje",
            QuestType::Daily,
            Difficulty::Easy,
            QuestCategory::Calls,
            3,
        )
        .with_rewards(60, 12),
        Quest::new(
            &uuid::Uuid::new_v4().to_string(),
            "Enviar 5 propostas",
            "Prepare e envie 5 propostas comerciais",
            QuestType::Daily,
            Difficulty::Medium,
            QuestCategory::Closing,
            5,
        )
        .with_rewards(100, 25),
    ]
}

pub fn starter_achievements() -> Vec<Achievement> {
    let unlocked_at = Some(Utc::now() - Duration::days(3));
    let achievement = |id: &str,
                       title: &str,
                       description: &str,
                       icon: &str,
                       xp: u32,
                       coins: u32,
                       category: AchievementCategory,
                       unlocked: bool| Achievement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        xp_reward: xp,
        coin_reward: coins,
        unlocked,
        unlocked_at: if unlocked { unlocked_at } else { None },
        category,
    };
    vec![
        achievement("1", "Primeira Venda", "Feche sua primeira venda", "🏆", 100, 20, AchievementCategory::Sales, true),
        achievement("2", "Maratonista", "Faça 50 ligações em uma semana", "📞", 200, 40, AchievementCategory::Activity, true),
        achievement("3", "Em Chamas", "Mantenha uma sequência de 7 dias", "🔥", 150, 30, AchievementCategory::Streak, false),
        achievement("4", "Top Vendedor", "Alcance o topo do ranking mensal", "👑", 500, 100, AchievementCategory::Special, false),
        achievement("5", "Meta Batida", "Supere a meta mensal de vendas", "🎯", 300, 60, AchievementCategory::Sales, false),
    ]
}

pub fn store_catalog() -> Vec<StoreItem> {
    let item = |id: &str, name: &str, description: &str, price: u32, category: StoreCategory, icon: &str| {
        StoreItem {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
            icon: icon.to_string(),
            available: true,
        }
    };
    vec![
        item("1", "XP Boost 2x", "Dobre seu XP por 24 horas", 50, StoreCategory::PowerUps, "⚡"),
        item("2", "Quest Extra", "Desbloqueie uma quest adicional hoje", 30, StoreCategory::PowerUps, "🎯"),
        item("3", "Proteção de Sequência", "Mantenha sua sequência mesmo perdendo um dia", 75, StoreCategory::PowerUps, "🛡️"),
        item("4", "Avatar Premium", "Desbloqueie avatares exclusivos", 100, StoreCategory::Customization, "👤"),
        item("5", "Tema Dourado", "Interface com tema dourado exclusivo", 150, StoreCategory::Customization, "🎨"),
        item("6", "Vale Café", "R$ 20 para usar em cafeterias parceiras", 200, StoreCategory::Rewards, "☕"),
        item("7", "Curso de Vendas", "Acesso a curso premium de técnicas de vendas", 300, StoreCategory::Training, "📚"),
        item("8", "Mentoria 1:1", "1 hora de mentoria com especialista em vendas", 500, StoreCategory::Training, "🎓"),
    ]
}

pub fn leaderboard() -> Vec<LeaderboardUser> {
    let entry = |id: &str, name: &str, level: u32, xp: u32, streak: u32, sales: u32, rank: u32| {
        LeaderboardUser {
            id: id.to_string(),
            name: name.to_string(),
            avatar: None,
            level,
            xp,
            streak,
            sales_this_month: sales,
            rank,
        }
    };
    vec![
        entry("1", "Ana Silva", 8, 4200, 15, 28, 1),
        entry("2", "Carlos Santos", 7, 3800, 12, 25, 2),
        entry("3", "Maria Oliveira", 6, 3200, 8, 22, 3),
        entry("4", "João Pereira", 6, 2900, 10, 20, 4),
        entry("5", "Lucia Costa", 5, 2600, 6, 18, 5),
    ]
}

pub fn starter_leads() -> Vec<Lead> {
    let lead = |id: &str,
                name: &str,
                email: &str,
                phone: &str,
                company: &str,
                value: f64,
                stage: LeadStage,
                probability: u32,
                day: u32,
                source: &str,
                golden: bool| Lead {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: None,
        company: company.to_string(),
        interests: None,
        referred_by: None,
        marital_status: None,
        has_children: None,
        last_contact_type: None,
        last_contact_notes: None,
        value,
        stage,
        probability,
        last_contact: NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default(),
        source: source.to_string(),
        is_golden_client: golden,
    };
    vec![
        lead("1", "João Silva", "joao@empresa.com", "(11) 99999-9999", "Tech Solutions", 15000.0, LeadStage::Qualified, 75, 15, "LinkedIn", true),
        lead("2", "Maria Santos", "maria@startup.com", "(11) 88888-8888", "StartupX", 8500.0, LeadStage::Proposal, 60, 14, "Indicação", false),
        lead("3", "Pedro Costa", "pedro@corp.com", "(11) 77777-7777", "Corp Industries", 25000.0, LeadStage::Negotiation, 85, 13, "Website", true),
    ]
}

pub fn starter_inventory() -> Vec<InventoryItem> {
    let now = Utc::now();
    vec![
        InventoryItem {
            id: "1".to_string(),
            title: "A Grande Esperança".to_string(),
            category: InventoryCategory::Religious,
            stock: 25,
            price: 15.0,
            cost: 8.0,
            isbn: None,
            publisher: Some("Casa Publicadora Brasileira".to_string()),
            added_at: now,
            updated_at: now,
        },
        InventoryItem {
            id: "2".to_string(),
            title: "Vida Saudável".to_string(),
            category: InventoryCategory::Health,
            stock: 15,
            price: 20.0,
            cost: 12.0,
            isbn: None,
            publisher: Some("Casa Publicadora Brasileira".to_string()),
            added_at: now,
            updated_at: now,
        },
    ]
}

pub fn rejection_scenarios() -> Vec<RejectionScenario> {
    vec![
        RejectionScenario {
            id: "1".to_string(),
            title: "Está muito caro".to_string(),
            description: "O cliente acha o preço alto demais".to_string(),
            difficulty: ScenarioDifficulty::Beginner,
            category: ObjectionCategory::Price,
            scenario: "Gostei do produto, mas está muito caro para mim agora.".to_string(),
            suggested_responses: strings(&[
                "Entendo. Vamos olhar juntos o valor que isso traz no dia a dia?",
                "Se dividirmos o investimento por mês, como fica para você?",
            ]),
            tips: strings(&["Foque no valor, não no preço", "Pergunte com o que ele está comparando"]),
            completed: false,
            score: None,
            completed_at: None,
        },
        RejectionScenario {
            id: "2".to_string(),
            title: "Preciso pensar".to_string(),
            description: "O cliente quer adiar a decisão".to_string(),
            difficulty: ScenarioDifficulty::Intermediate,
            category: ObjectionCategory::Timing,
            scenario: "Vou pensar com calma e depois te procuro.".to_string(),
            suggested_responses: strings(&[
                "Claro. O que exatamente você gostaria de avaliar melhor?",
            ]),
            tips: strings(&["Descubra a dúvida real", "Combine um próximo passo com data"]),
            completed: false,
            score: None,
            completed_at: None,
        },
        RejectionScenario {
            id: "3".to_string(),
            title: "Preciso falar com meu sócio".to_string(),
            description: "O cliente não é o único decisor".to_string(),
            difficulty: ScenarioDifficulty::Advanced,
            category: ObjectionCategory::Authority,
            scenario: "Quem decide isso é meu sócio, não posso fechar sozinho.".to_string(),
            suggested_responses: strings(&[
                "Faz sentido. Podemos marcar uma conversa rápida com vocês dois?",
            ]),
            tips: strings(&["Inclua o decisor cedo", "Prepare o cliente para defender a solução"]),
            completed: false,
            score: None,
            completed_at: None,
        },
    ]
}

pub fn sales_techniques() -> Vec<SalesTechnique> {
    vec![
        SalesTechnique {
            id: "spin".to_string(),
            title: "Técnica SPIN".to_string(),
            category: "Descoberta".to_string(),
            difficulty: ScenarioDifficulty::Intermediate,
            description: "Perguntas de Situação, Problema, Implicação e Necessidade para revelar o que o cliente precisa.".to_string(),
            steps: strings(&[
                "Situação: pergunte sobre o cenário atual do cliente",
                "Problema: identifique dificuldades",
                "Implicação: explore as consequências desses problemas",
                "Necessidade: desenvolva a necessidade de uma solução",
            ]),
            example: "Como vocês controlam o estoque hoje? → Já faltou produto? → Isso afeta as vendas? → Seria útil automatizar?".to_string(),
            tips: strings(&["Use mais perguntas de Implicação e Necessidade", "Escute ativamente"]),
            when_to_use: "Vendas consultivas e produtos complexos".to_string(),
        },
        SalesTechnique {
            id: "aida".to_string(),
            title: "Modelo AIDA".to_string(),
            category: "Apresentação".to_string(),
            difficulty: ScenarioDifficulty::Beginner,
            description: "Atenção, Interesse, Desejo e Ação como roteiro de apresentação.".to_string(),
            steps: strings(&[
                "Atenção: abra com algo impactante",
                "Interesse: mostre benefícios relevantes",
                "Desejo: demonstre valor e resultados",
                "Ação: conduza para um próximo passo concreto",
            ]),
            example: "70% das empresas perdem vendas por falta de follow-up → nosso CRM automatiza isso → clientes venderam 40% mais → vamos agendar uma demonstração?".to_string(),
            tips: strings(&["Personalize cada etapa"]),
            when_to_use: "Apresentações curtas e primeiros contatos".to_string(),
        },
        SalesTechnique {
            id: "consultiva".to_string(),
            title: "Venda Consultiva".to_string(),
            category: "Abordagem".to_string(),
            difficulty: ScenarioDifficulty::Advanced,
            description: "Posicione-se como conselheiro que entende o negócio do cliente.".to_string(),
            steps: strings(&["Pesquise o cliente", "Diagnostique", "Proponha", "Acompanhe"]),
            example: "Analisei seu mercado e vi três oportunidades que podemos explorar juntos.".to_string(),
            tips: strings(&["Estude antes da reunião"]),
            when_to_use: "Relacionamentos de longo prazo".to_string(),
        },
        SalesTechnique {
            id: "storytelling".to_string(),
            title: "Storytelling em Vendas".to_string(),
            category: "Persuasão".to_string(),
            difficulty: ScenarioDifficulty::Intermediate,
            description: "Histórias de clientes reais para gerar identificação.".to_string(),
            steps: strings(&["Contexto", "Conflito", "Solução", "Resultado"]),
            example: "Um cliente parecido com você tinha o mesmo desafio...".to_string(),
            tips: strings(&["Use números concretos"]),
            when_to_use: "Quando o cliente precisa visualizar o resultado".to_string(),
        },
        SalesTechnique {
            id: "assumptivo".to_string(),
            title: "Fechamento Assumptivo".to_string(),
            category: "Fechamento".to_string(),
            difficulty: ScenarioDifficulty::Intermediate,
            description: "Conduza a conversa como se a decisão já estivesse tomada.".to_string(),
            steps: strings(&["Confirme os sinais de compra", "Proponha os detalhes da entrega"]),
            example: "Prefere receber na segunda ou na quarta?".to_string(),
            tips: strings(&["Só use após sinais claros de interesse"]),
            when_to_use: "Cliente engajado e sem objeções abertas".to_string(),
        },
        SalesTechnique {
            id: "objecoes".to_string(),
            title: "Tratamento de Objeções".to_string(),
            category: "Objeções".to_string(),
            difficulty: ScenarioDifficulty::Advanced,
            description: "Ouça, valide, esclareça e responda cada objeção.".to_string(),
            steps: strings(&["Ouça sem interromper", "Valide a preocupação", "Pergunte", "Responda com valor"]),
            example: "Entendo sua preocupação com o preço. Posso mostrar como isso se paga?".to_string(),
            tips: strings(&["Nunca discuta com o cliente"]),
            when_to_use: "Sempre que surgir resistência".to_string(),
        },
    ]
}
