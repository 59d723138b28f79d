//! Command processor for the interactive console.
//!
//! [`Dashboard`] owns every in-memory container for the lifetime of one
//! console session. The [`SessionStore`] is passed in explicitly so the same
//! processor runs against sled in the binary and against memory in tests.

use std::fmt::Write;
use std::time::Duration;

use anyhow::Result;
use log::{debug, info};

use crate::analytics::{format_currency, Analytics};
use crate::auth::{resolve, submit, AuthForm, GuardDecision, Route, SessionStore};
use crate::console::commands::{help_text, parse_command, ConsoleCommand};
use crate::crm::{LeadBook, NewLead, StageFilter, NONE_OF_THE_ABOVE};
use crate::gamification::{
    format_quest_line, is_current_user, rank_badge, AchievementPanel, Leaderboard,
    LeaderboardMetric, QuestBoard, RejectionSimulator, RewardsStore, StoreNotice,
    TechniqueLibrary, DEFAULT_COMPLETE_DELAY,
};
use crate::inventory::{InventoryBook, NewInventoryItem};
use crate::logutil::escape_log;
use crate::settings::{segment_label, SegmentForm};
use crate::storage::KeyValueStore;
use crate::types::{InventoryCategory, Quest, Segment, StoreCategory};

pub struct Dashboard {
    route: Route,
    quit: bool,
    quest_delay: Duration,
    pub quests: QuestBoard,
    pub achievements: AchievementPanel,
    pub store: RewardsStore,
    pub leaderboard: Leaderboard,
    pub practice: RejectionSimulator,
    pub techniques: TechniqueLibrary,
    pub leads: LeadBook,
    pub inventory: InventoryBook,
    pub analytics: Analytics,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DEFAULT_COMPLETE_DELAY)
    }
}

impl Dashboard {
    pub fn new(quest_delay: Duration) -> Self {
        Self {
            route: Route::Entry,
            quit: false,
            quest_delay,
            quests: QuestBoard::seeded(),
            achievements: AchievementPanel::seeded(),
            store: RewardsStore::default(),
            leaderboard: Leaderboard::default(),
            practice: RejectionSimulator::default(),
            techniques: TechniqueLibrary::default(),
            leads: LeadBook::seeded(),
            inventory: InventoryBook::seeded(),
            analytics: Analytics::default(),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Prompt reflecting the current page.
    pub fn prompt(&self) -> String {
        format!("blitz:{}> ", self.route)
    }

    pub async fn process_command<S: KeyValueStore>(
        &mut self,
        session: &mut SessionStore<S>,
        input: &str,
    ) -> Result<String> {
        let command = parse_command(input);
        debug!("Console command parsed: {:?}", command);

        if let Some(page) = owning_route(&command) {
            if let Some(refusal) = self.check_access(session, page) {
                return Ok(refusal);
            }
        }

        match command {
            ConsoleCommand::Go(route) => Ok(self.handle_go(session, route)),
            ConsoleCommand::Where => Ok(format!("Página atual: {}", self.route)),
            ConsoleCommand::Help => Ok(help_text()),
            ConsoleCommand::Quit => {
                self.quit = true;
                Ok("Até logo!".to_string())
            }
            ConsoleCommand::Login { email, password } => {
                self.handle_auth(session, AuthForm::Login { email, password }).await
            }
            ConsoleCommand::Register {
                email,
                password,
                confirm,
                name,
            } => {
                let form = AuthForm::Register {
                    name,
                    email,
                    password,
                    confirm_password: confirm,
                };
                self.handle_auth(session, form).await
            }
            ConsoleCommand::Logout => Ok(self.handle_logout(session)),
            ConsoleCommand::Profile => Ok(self.handle_profile(session)),
            ConsoleCommand::Quests(filter) => Ok(self.handle_quests(filter.as_deref())),
            ConsoleCommand::Progress(id, amount) => Ok(self.handle_progress(&id, amount)),
            ConsoleCommand::Complete(id) => Ok(self.handle_complete(&id).await),
            ConsoleCommand::NewQuests => {
                self.quests.generate_daily_quests();
                Ok(format!(
                    "Novas quests diárias geradas!\n{}",
                    self.handle_quests(Some("daily"))
                ))
            }
            ConsoleCommand::Achievements => Ok(self.handle_achievements()),
            ConsoleCommand::Store(category) => Ok(self.handle_store(session, category.as_deref())),
            ConsoleCommand::Buy(id) => Ok(self.handle_buy(session, &id)),
            ConsoleCommand::Ranking(metric) => Ok(self.handle_ranking(session, metric.as_deref())),
            ConsoleCommand::Practice(id) => Ok(self.handle_practice(id.as_deref())),
            ConsoleCommand::Answer(text) => Ok(self.handle_answer(&text)),
            ConsoleCommand::ResetPractice => {
                self.practice.reset();
                Ok("Simulador reiniciado.".to_string())
            }
            ConsoleCommand::Techniques(category) => Ok(self.handle_techniques(category.as_deref())),
            ConsoleCommand::Study(id) => Ok(self.handle_study(&id)),
            ConsoleCommand::Leads { stage, search } => Ok(self.handle_leads(stage.as_deref(), &search)),
            ConsoleCommand::AddLead(fields) => Ok(self.handle_add_lead(fields)),
            ConsoleCommand::Golden => Ok(self.handle_golden()),
            ConsoleCommand::Pipeline => Ok(self.handle_pipeline()),
            ConsoleCommand::Stock => Ok(self.handle_stock()),
            ConsoleCommand::AddBook(fields) => Ok(self.handle_add_book(fields)),
            ConsoleCommand::Adjust(id, delta) => Ok(self.handle_adjust(&id, delta)),
            ConsoleCommand::Stats => Ok(self.handle_stats(session)),
            ConsoleCommand::Segment(args) => Ok(self.handle_segment(session, &args)),
            ConsoleCommand::Unknown(cmd) if cmd.starts_with("Use:") => Ok(cmd),
            ConsoleCommand::Unknown(cmd) => Ok(format!(
                "Comando desconhecido: '{}'\nDigite HELP para ver os comandos.",
                escape_log(&cmd)
            )),
        }
    }

    /// Run the guard for a page-bound command. Anonymous viewers are sent
    /// back to the entry page.
    fn check_access<S: KeyValueStore>(
        &mut self,
        session: &SessionStore<S>,
        page: Route,
    ) -> Option<String> {
        match resolve(page, session.current(), session.is_loading()) {
            GuardDecision::Loading => Some("Carregando...".to_string()),
            GuardDecision::Redirect(Route::Entry) => {
                self.route = Route::Entry;
                Some("Faça login para continuar.".to_string())
            }
            GuardDecision::Redirect(_) | GuardDecision::Render => None,
        }
    }

    fn handle_go<S: KeyValueStore>(&mut self, session: &SessionStore<S>, route: Route) -> String {
        match resolve(route, session.current(), session.is_loading()) {
            GuardDecision::Loading => "Carregando...".to_string(),
            GuardDecision::Redirect(target) => {
                self.route = target;
                if target == Route::Entry {
                    "Faça login para continuar.".to_string()
                } else {
                    format!("Você já está conectado.\n{}", self.render_page(session))
                }
            }
            GuardDecision::Render => {
                self.route = route;
                self.render_page(session)
            }
        }
    }

    fn render_page<S: KeyValueStore>(&self, session: &SessionStore<S>) -> String {
        match self.route {
            Route::Entry => "BRIDGE Solutions\nTransforme suas vendas em um jogo\nUse LOGIN ou REGISTER.".to_string(),
            Route::Dashboard => self.handle_profile(session),
            Route::Analytics => self.handle_stats(session),
            Route::Crm => format!("{}\n{}", self.crm_summary(), self.handle_leads(None, "")),
            Route::Gamification => format!(
                "Progresso diário: {}%\n{}",
                self.quests.daily_progress(),
                self.handle_quests(None)
            ),
            Route::Inventory => self.handle_stock(),
            Route::Settings => {
                let user = session.current();
                format!(
                    "Segmento primário: {}\nSegmento secundário: {}\nÁrea: {}",
                    segment_label(user.and_then(|u| u.primary_segment)),
                    segment_label(user.and_then(|u| u.secondary_segment)),
                    user.and_then(|u| u.geographic_area.as_deref()).unwrap_or("-")
                )
            }
        }
    }

    async fn handle_auth<S: KeyValueStore>(
        &mut self,
        session: &mut SessionStore<S>,
        form: AuthForm,
    ) -> Result<String> {
        match submit(&form, session).await {
            Ok(notice) => {
                self.route = Route::Dashboard;
                Ok(format!(
                    "{}\n{}\n{}",
                    notice.title,
                    notice.description,
                    self.handle_profile(session)
                ))
            }
            Err(err) => Ok(err.to_string()),
        }
    }

    fn handle_logout<S: KeyValueStore>(&mut self, session: &mut SessionStore<S>) -> String {
        session.logout();
        self.route = Route::Entry;
        "Sessão encerrada.".to_string()
    }

    fn handle_profile<S: KeyValueStore>(&self, session: &SessionStore<S>) -> String {
        let Some(user) = session.current() else {
            return "Nenhum usuário conectado.".to_string();
        };
        format!(
            "Bem-vindo, {}!\nNível {} | {}/{} XP ({:.0}%, {} XP para o próximo nível)\nMoedas: {} | Sequência: {} dias",
            user.name,
            user.level,
            user.xp,
            user.xp_to_next_level(),
            user.level_progress_percent(),
            user.xp_remaining(),
            user.coins,
            user.streak
        )
    }

    fn handle_quests(&self, filter: Option<&str>) -> String {
        let quests: Vec<&Quest> = match filter.map(|f| f.to_lowercase()).as_deref() {
            None => self.quests.quests().iter().collect(),
            Some("daily") => self.quests.daily_quests(),
            Some("weekly") => self.quests.weekly_quests(),
            Some("special") => self.quests.special_quests(),
            Some("completed") => self.quests.completed_quests(),
            Some("active") => self.quests.active_quests(),
            Some(other) => return format!("Filtro desconhecido: {}", escape_log(other)),
        };
        if quests.is_empty() {
            return "Nenhuma quest.".to_string();
        }
        quests
            .into_iter()
            .map(format_quest_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn handle_progress(&mut self, id: &str, amount: u32) -> String {
        let Some(quest) = self.quests.get(id) else {
            return format!("Quest não encontrada: {}", escape_log(id));
        };
        if quest.completed || quest.current_value >= quest.target_value {
            return "Esta quest não aceita mais progresso.".to_string();
        }
        self.quests.add_progress(id, amount);
        match self.quests.get(id) {
            Some(quest) => format_quest_line(quest),
            None => String::new(),
        }
    }

    async fn handle_complete(&mut self, id: &str) -> String {
        let Some(quest) = self.quests.get(id) else {
            return format!("Quest não encontrada: {}", escape_log(id));
        };
        if !quest.can_complete() {
            return if quest.completed {
                "Quest já concluída.".to_string()
            } else {
                format!(
                    "Ainda faltam {} para concluir.",
                    quest.target_value - quest.current_value
                )
            };
        }
        match self.quests.claim(id, self.quest_delay).await {
            Some(reward) => format!("Quest concluída!\n{}", reward),
            None => "Quest já concluída.".to_string(),
        }
    }

    fn handle_achievements(&self) -> String {
        let panel = &self.achievements;
        let mut out = format!(
            "Conquistas: {}/{} ({}%) | {} XP e {} moedas ganhos\n",
            panel.unlocked().len(),
            panel.all().len(),
            panel.completion_percent(),
            panel.total_xp_earned(),
            panel.total_coins_earned()
        );
        for progress in panel.category_progress() {
            let _ = writeln!(
                out,
                "  {}: {}/{}",
                progress.category.label(),
                progress.unlocked,
                progress.total
            );
        }
        for a in panel.all() {
            let mark = if a.unlocked { "✓" } else { "🔒" };
            let _ = writeln!(out, "{} {} {} - {}", mark, a.icon, a.title, a.description);
        }
        out.trim_end().to_string()
    }

    fn handle_store<S: KeyValueStore>(&self, session: &SessionStore<S>, category: Option<&str>) -> String {
        let items = match category {
            None => self.store.items().iter().collect::<Vec<_>>(),
            Some(name) => match parse_store_category(name) {
                Some(c) => self.store.by_category(c),
                None => return format!("Categoria desconhecida: {}", escape_log(name)),
            },
        };
        let coins = session.current().map(|u| u.coins).unwrap_or(0);
        let mut out = format!("Suas moedas: {}\n", coins);
        for item in items {
            let state = if self.store.is_purchased(&item.id) {
                " (comprado)"
            } else if !RewardsStore::can_afford(session.current(), item.price) {
                " (moedas insuficientes)"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "{} {} {} - {} moedas [{}]{}",
                item.id,
                item.icon,
                item.name,
                item.price,
                item.category.label(),
                state
            );
        }
        out.trim_end().to_string()
    }

    fn handle_buy<S: KeyValueStore>(&mut self, session: &SessionStore<S>, id: &str) -> String {
        let notice = match self.store.purchase(session.current(), id) {
            Ok(notice) => notice,
            Err(err) => StoreNotice::from_error(&err),
        };
        format!("{}\n{}", notice.title, notice.description)
    }

    fn handle_ranking<S: KeyValueStore>(&self, session: &SessionStore<S>, metric: Option<&str>) -> String {
        let metric = match metric {
            None => LeaderboardMetric::default(),
            Some(m) => match LeaderboardMetric::parse(m) {
                Some(m) => m,
                None => return "Use: RANKING [xp|sales|streak]".to_string(),
            },
        };
        let mut out = format!("Ranking por {}\n", metric);
        for (i, entry) in self.leaderboard.ranked_by(metric).into_iter().enumerate() {
            let position = i as u32 + 1;
            let badge = rank_badge(position).map(|b| format!(" [{}]", b)).unwrap_or_default();
            let you = if is_current_user(entry, session.current()) { " (você)" } else { "" };
            let _ = writeln!(
                out,
                "#{} {} - Nível {} - {}{}{}",
                position,
                entry.name,
                entry.level,
                Leaderboard::metric_value(metric, entry),
                badge,
                you
            );
        }
        out.trim_end().to_string()
    }

    fn handle_practice(&mut self, id: Option<&str>) -> String {
        let Some(id) = id else {
            let mut out = format!(
                "Cenários disponíveis ({}), concluídos: {}, média: {} pontos\n",
                self.practice.available().len(),
                self.practice.completed().len(),
                self.practice.average_score()
            );
            for s in self.practice.available() {
                let _ = writeln!(out, "{} {} [{}]", s.id, s.title, s.difficulty.label());
            }
            return out.trim_end().to_string();
        };
        match self.practice.start(id) {
            Ok(s) => format!(
                "{}\n\"{}\"\nResponda com ANSWER <sua resposta>.",
                s.title, s.scenario
            ),
            Err(_) => format!("Cenário não encontrado: {}", escape_log(id)),
        }
    }

    fn handle_answer(&mut self, text: &str) -> String {
        if self.practice.current().is_none() {
            return "Escolha um cenário com PRACTICE <id>.".to_string();
        }
        match self.practice.submit_response(text) {
            Some(result) => {
                let mut out = format!(
                    "Resposta avaliada!\n{}\n{}/100 - {}",
                    result.toast(),
                    result.score,
                    result.feedback
                );
                if let Some(s) = self.practice.current() {
                    for r in &s.suggested_responses {
                        let _ = write!(out, "\n  • {}", r);
                    }
                    for t in &s.tips {
                        let _ = write!(out, "\n  💡 {}", t);
                    }
                }
                out
            }
            None => "Digite uma resposta.".to_string(),
        }
    }

    fn handle_techniques(&self, category: Option<&str>) -> String {
        let list = self.techniques.filter(category.unwrap_or("Todas"));
        let mut out = format!(
            "Técnicas estudadas: {}/{}\n",
            self.techniques.studied_count(),
            self.techniques.total()
        );
        for t in list {
            let mark = if self.techniques.is_studied(&t.id) { "✓" } else { " " };
            let _ = writeln!(
                out,
                "[{}] {} {} ({}, {})",
                mark,
                t.id,
                t.title,
                t.category,
                t.difficulty.label()
            );
        }
        out.trim_end().to_string()
    }

    fn handle_study(&mut self, id: &str) -> String {
        if self.techniques.mark_as_studied(id) {
            "Técnica marcada como estudada!".to_string()
        } else if self.techniques.is_studied(id) {
            "Você já estudou esta técnica.".to_string()
        } else {
            format!("Técnica não encontrada: {}", escape_log(id))
        }
    }

    fn crm_summary(&self) -> String {
        format!(
            "Leads: {} | Clientes dourados: {} | Pipeline: {} | Probabilidade média: {:.0}%",
            self.leads.leads().len(),
            self.leads.golden_clients().len(),
            format_currency(self.leads.total_value()),
            self.leads.average_probability()
        )
    }

    fn handle_leads(&self, stage: Option<&str>, search: &str) -> String {
        let filter = match stage {
            None => StageFilter::All,
            Some(s) => match StageFilter::parse(s) {
                Some(f) => f,
                None => return format!("Estágio desconhecido: {}", escape_log(s)),
            },
        };
        let leads = self.leads.filter(search, filter);
        if leads.is_empty() {
            return "Nenhum lead encontrado.".to_string();
        }
        leads
            .iter()
            .map(|l| {
                format!(
                    "{}{} - {} - {} [{}] {}%",
                    if l.is_golden_client { "⭐ " } else { "" },
                    l.name,
                    l.company,
                    format_currency(l.value),
                    l.stage.label(),
                    l.probability
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn handle_add_lead(&mut self, fields: Vec<String>) -> String {
        let get = |i: usize| fields.get(i).cloned().unwrap_or_default();
        let mut form = NewLead {
            name: get(0),
            company: get(1),
            email: get(2),
            phone: get(3),
            value: get(4),
            source: get(5),
            ..Default::default()
        };
        if form.name.is_empty() {
            return "Use: ADDLEAD nome; empresa; email; telefone; valor; origem; interesses".to_string();
        }
        let mut custom = Vec::new();
        let interests_field = get(6);
        for interest in interests_field.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if interest.eq_ignore_ascii_case(NONE_OF_THE_ABOVE) {
                form.toggle_interest(NONE_OF_THE_ABOVE, true);
                custom.clear();
            } else if form.interests.iter().any(|i| i == NONE_OF_THE_ABOVE) {
                custom.push(interest);
            } else {
                form.toggle_interest(interest, true);
            }
        }
        form.custom_interests = custom.join(", ");
        let lead = self.leads.add_lead(form);
        format!(
            "Lead adicionado: {} ({}) - {}",
            lead.name,
            lead.stage.label(),
            format_currency(lead.value)
        )
    }

    fn handle_golden(&self) -> String {
        let golden = self.leads.golden_clients();
        if golden.is_empty() {
            return "Nenhum cliente dourado.".to_string();
        }
        golden
            .iter()
            .map(|l| format!("⭐ {} - {} - {}", l.name, l.company, format_currency(l.value)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn handle_pipeline(&self) -> String {
        let mut out = String::from("Pipeline por estágio\n");
        for (stage, value) in self.leads.pipeline_by_stage() {
            let _ = writeln!(out, "  {}: {}", stage.label(), format_currency(value));
        }
        let _ = write!(
            out,
            "Previsão ponderada: {}",
            format_currency(self.leads.weighted_forecast())
        );
        out
    }

    fn handle_stock(&self) -> String {
        let inv = &self.inventory;
        let mut out = format!(
            "Valor em estoque: {} | Unidades: {} | Estoque baixo: {} | Receita potencial: {} | Margem: {}\n",
            format_currency(inv.total_value()),
            inv.total_units(),
            inv.low_stock_count(),
            format_currency(inv.potential_revenue()),
            format_currency(inv.potential_margin())
        );
        for item in inv.items() {
            let low = if inv.low_stock().iter().any(|i| i.id == item.id) {
                " [Estoque Baixo]"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "{} {} ({}) - {} un. - R$ {:.2}{}",
                item.id,
                item.title,
                item.category.label(),
                item.stock,
                item.price,
                low
            );
        }
        out.trim_end().to_string()
    }

    fn handle_add_book(&mut self, fields: Vec<String>) -> String {
        let get = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");
        let category = match get(1) {
            "" => InventoryCategory::Religious,
            c => match InventoryCategory::parse(c) {
                Some(c) => c,
                None => return format!("Categoria desconhecida: {}", escape_log(c)),
            },
        };
        let form = NewInventoryItem {
            title: get(0).to_string(),
            category,
            stock: get(2).parse().unwrap_or(0),
            price: get(3).parse().unwrap_or(0.0),
            cost: get(4).parse().unwrap_or(0.0),
            isbn: None,
            publisher: Some(get(5).to_string()).filter(|p| !p.is_empty()),
        };
        match self.inventory.add_item(form) {
            Ok(item) => format!("Livro adicionado: {} ({} un.)", item.title, item.stock),
            Err(_) => "Informe um título e um preço maior que zero.".to_string(),
        }
    }

    fn handle_adjust(&mut self, id: &str, delta: i64) -> String {
        match self.inventory.adjust_stock(id, delta) {
            Ok(stock) => format!("Estoque atualizado: {} un.", stock),
            Err(_) => format!("Item não encontrado: {}", escape_log(id)),
        }
    }

    fn handle_stats<S: KeyValueStore>(&self, session: &SessionStore<S>) -> String {
        let streak = session.current().map(|u| u.streak).unwrap_or(0);
        let stats = self.analytics.stats(streak);
        let mut out = String::new();
        for card in self.analytics.metric_cards(&stats) {
            let sign = if card.change > 0.0 { "+" } else { "" };
            let _ = writeln!(
                out,
                "{}: {} ({}{}% vs mês anterior)",
                card.title, card.value, sign, card.change
            );
        }
        let _ = writeln!(
            out,
            "Meta atingida: {:.1}% | Meses na meta: {}/{}",
            self.analytics.goal_attainment(),
            self.analytics.months_on_target(),
            self.analytics.sales.len()
        );
        let _ = writeln!(
            out,
            "Atividades na semana: {} (pico: {}) | XP no mês: {}",
            self.analytics.weekly_activity_total(),
            self.analytics.busiest_day().map(|d| d.day).unwrap_or("-"),
            self.analytics.total_xp_gained()
        );
        let _ = write!(out, "Funil:");
        for (name, rate) in self.analytics.pipeline_conversion() {
            let _ = write!(out, " {} {:.1}%", name, rate);
        }
        let _ = write!(out, "\nDistribuição:");
        for (name, share) in self.analytics.pipeline_shares() {
            let _ = write!(out, " {} {:.0}%", name, share);
        }
        out
    }

    fn handle_segment<S: KeyValueStore>(&mut self, session: &mut SessionStore<S>, args: &[String]) -> String {
        let primary = args.first().and_then(|s| Segment::parse(s));
        let (secondary, area_from) = match args.get(1).map(String::as_str) {
            Some("none") => (None, 2),
            Some(s) => match Segment::parse(s) {
                Some(seg) => (Some(seg), 2),
                None => (None, 1),
            },
            None => (None, 1),
        };
        let form = SegmentForm {
            primary,
            secondary,
            geographic_area: args.get(area_from..).map(|a| a.join(" ")).unwrap_or_default(),
        };
        match form.save() {
            Ok((update, notice)) => {
                session.update_user(update);
                info!("Segments saved");
                format!("{}\n{}", notice.title, notice.description)
            }
            Err(notice) => format!("{}\n{}", notice.title, notice.description),
        }
    }
}

/// Page that must be viewable for a command to run.
fn owning_route(command: &ConsoleCommand) -> Option<Route> {
    use ConsoleCommand as C;
    match command {
        C::Profile => Some(Route::Dashboard),
        C::Quests(_)
        | C::Progress(..)
        | C::Complete(_)
        | C::NewQuests
        | C::Achievements
        | C::Store(_)
        | C::Buy(_)
        | C::Ranking(_)
        | C::Practice(_)
        | C::Answer(_)
        | C::ResetPractice
        | C::Techniques(_)
        | C::Study(_) => Some(Route::Gamification),
        C::Leads { .. } | C::AddLead(_) | C::Golden | C::Pipeline => Some(Route::Crm),
        C::Stock | C::AddBook(_) | C::Adjust(..) => Some(Route::Inventory),
        C::Stats => Some(Route::Analytics),
        C::Segment(_) => Some(Route::Settings),
        C::Go(_)
        | C::Where
        | C::Help
        | C::Quit
        | C::Login { .. }
        | C::Register { .. }
        | C::Logout
        | C::Unknown(_) => None,
    }
}

fn parse_store_category(name: &str) -> Option<StoreCategory> {
    let wanted = name.trim().to_lowercase();
    StoreCategory::ALL.into_iter().find(|c| {
        c.label().to_lowercase() == wanted
            || serde_json::to_value(c)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .is_some_and(|v| v == wanted)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionStoreBuilder;
    use crate::storage::MemoryStore;

    fn session() -> SessionStore<MemoryStore> {
        SessionStoreBuilder::new(MemoryStore::new())
            .auth_delay(Duration::ZERO)
            .open()
    }

    #[tokio::test]
    async fn test_guarded_commands_need_login() {
        let mut dash = Dashboard::new(Duration::ZERO);
        let mut session = session();
        let out = dash.process_command(&mut session, "quests").await.unwrap();
        assert_eq!(out, "Faça login para continuar.");
        let out = dash.process_command(&mut session, "go crm").await.unwrap();
        assert_eq!(out, "Faça login para continuar.");
        assert_eq!(dash.route(), Route::Entry);
    }

    #[tokio::test]
    async fn test_login_then_navigate() {
        let mut dash = Dashboard::new(Duration::ZERO);
        let mut session = session();
        let out = dash
            .process_command(&mut session, "login joao@empresa.com segredo")
            .await
            .unwrap();
        assert!(out.starts_with("Login realizado!"));
        assert!(out.contains("Bem-vindo, joao!"));
        assert_eq!(dash.route(), Route::Dashboard);

        dash.process_command(&mut session, "go crm").await.unwrap();
        assert_eq!(dash.route(), Route::Crm);
        let out = dash.process_command(&mut session, "go /").await.unwrap();
        assert!(out.starts_with("Você já está conectado."));
        assert_eq!(dash.route(), Route::Dashboard);
    }

    #[tokio::test]
    async fn test_login_validation_message() {
        let mut dash = Dashboard::new(Duration::ZERO);
        let mut session = session();
        let out = dash.process_command(&mut session, "login a@b.com").await.unwrap();
        assert_eq!(out, "Por favor, preencha todos os campos");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_store_category_names() {
        assert_eq!(parse_store_category("power-ups"), Some(StoreCategory::PowerUps));
        assert_eq!(parse_store_category("Treinamento"), Some(StoreCategory::Training));
        assert_eq!(parse_store_category("x"), None);
    }
}
