//! Demo analytics shown on the dashboard: KPIs, chart series, the AI
//! diagnostics and the action plan. Only the action plan is mutable.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Diagnostico,
    PlanoDeAcao,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 2] = [DashboardTab::Diagnostico, DashboardTab::PlanoDeAcao];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Diagnostico => "Diagnóstico IA",
            DashboardTab::PlanoDeAcao => "Plano de Ação",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DashboardTab::Diagnostico => DashboardTab::PlanoDeAcao,
            DashboardTab::PlanoDeAcao => DashboardTab::Diagnostico,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

pub struct Kpi {
    pub title: &'static str,
    pub value: &'static str,
    pub change: f64,
    pub trend: Trend,
}

pub const KPIS: [Kpi; 4] = [
    Kpi {
        title: "Faturamento Mensal",
        value: "R$ 285.4K",
        change: 12.5,
        trend: Trend::Up,
    },
    Kpi {
        title: "Taxa de Conversão",
        value: "68.3%",
        change: 5.2,
        trend: Trend::Up,
    },
    Kpi {
        title: "Clientes Ativos",
        value: "1,247",
        change: -2.1,
        trend: Trend::Down,
    },
    Kpi {
        title: "Ticket Médio",
        value: "R$ 89.50",
        change: 8.3,
        trend: Trend::Up,
    },
];

pub const SALES_BY_MONTH: [(&str, u64); 8] = [
    ("Jan", 185),
    ("Fev", 198),
    ("Mar", 215),
    ("Abr", 208),
    ("Mai", 235),
    ("Jun", 248),
    ("Jul", 265),
    ("Ago", 285),
];

pub const CONVERSION_BY_WEEKDAY: [(&str, u64); 7] = [
    ("Seg", 65),
    ("Ter", 68),
    ("Qua", 72),
    ("Qui", 70),
    ("Sex", 75),
    ("Sab", 78),
    ("Dom", 62),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Alta,
    Media,
    Baixa,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Alta => "alta",
            Priority::Media => "média",
            Priority::Baixa => "baixa",
        }
    }
}

pub struct Diagnostic {
    pub title: &'static str,
    pub priority: Priority,
    pub impact: &'static str,
    pub solution: &'static str,
}

pub const DIAGNOSTICS: [Diagnostic; 3] = [
    Diagnostic {
        title: "Gestão de Estoque Ineficiente",
        priority: Priority::Alta,
        impact: "Perda estimada de R$ 15.2K/mês em produtos vencidos e ruptura de estoque",
        solution: "Implementar sistema de reposição automática baseado em IA e análise de giro",
    },
    Diagnostic {
        title: "Oportunidade de Marketing Digital",
        priority: Priority::Alta,
        impact: "Potencial de aumentar base de clientes em 25% com estratégias digitais",
        solution: "Campanha segmentada no Instagram e WhatsApp Business com ofertas personalizadas",
    },
    Diagnostic {
        title: "Tempo de Atendimento Elevado",
        priority: Priority::Media,
        impact: "Clientes aguardam 8min em média, resultando em 15% de desistências",
        solution: "Reorganizar fluxo de atendimento e implementar fila digital",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Pendente,
    EmAndamento,
    Concluida,
}

impl ActionStatus {
    pub fn label(self) -> &'static str {
        match self {
            ActionStatus::Pendente => "Pendente",
            ActionStatus::EmAndamento => "Em andamento",
            ActionStatus::Concluida => "Concluída",
        }
    }

    /// Checking a finished item reopens it; anything else completes it.
    pub fn toggled(self) -> Self {
        match self {
            ActionStatus::Concluida => ActionStatus::EmAndamento,
            _ => ActionStatus::Concluida,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActionItem {
    pub title: &'static str,
    pub description: &'static str,
    pub status: ActionStatus,
    pub deadline: &'static str,
    pub responsible: &'static str,
}

pub fn action_plan() -> Vec<ActionItem> {
    vec![
        ActionItem {
            title: "Revisar mix de produtos com baixo giro",
            description: "Analisar produtos com giro < 2x/mês e definir ações de liquidação",
            status: ActionStatus::Concluida,
            deadline: "15/10/2025",
            responsible: "João Silva",
        },
        ActionItem {
            title: "Configurar alertas de ruptura no sistema",
            description: "Implementar notificações automáticas quando estoque atingir ponto de pedido",
            status: ActionStatus::EmAndamento,
            deadline: "25/10/2025",
            responsible: "Maria Santos",
        },
        ActionItem {
            title: "Criar campanha Instagram Stories",
            description: "Desenvolver 10 stories sobre produtos em destaque com ofertas exclusivas",
            status: ActionStatus::Pendente,
            deadline: "30/10/2025",
            responsible: "Pedro Costa",
        },
        ActionItem {
            title: "Treinar equipe em atendimento ágil",
            description: "Workshop de 4h sobre técnicas de atendimento eficiente e uso do sistema",
            status: ActionStatus::Pendente,
            deadline: "05/11/2025",
            responsible: "Ana Lima",
        },
    ]
}

#[derive(Debug)]
pub struct DashboardState {
    pub tab: DashboardTab,
    pub selected_action: usize,
    pub actions: Vec<ActionItem>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            tab: DashboardTab::Diagnostico,
            selected_action: 0,
            actions: action_plan(),
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn select_next_action(&mut self) {
        if self.selected_action + 1 < self.actions.len() {
            self.selected_action += 1;
        }
    }

    pub fn select_prev_action(&mut self) {
        self.selected_action = self.selected_action.saturating_sub(1);
    }

    pub fn toggle_action(&mut self, index: usize) {
        if let Some(action) = self.actions.get_mut(index) {
            action.status = action.status.toggled();
        }
    }

    pub fn toggle_selected(&mut self) {
        self.toggle_action(self.selected_action);
    }

    pub fn completed_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| a.status == ActionStatus::Concluida)
            .count()
    }

    /// Fresh tab and selection when the dashboard is opened again.
    /// Action statuses are kept.
    pub fn reset_view(&mut self) {
        self.tab = DashboardTab::Diagnostico;
        self.selected_action = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycles_through_completion() {
        assert_eq!(ActionStatus::Pendente.toggled(), ActionStatus::Concluida);
        assert_eq!(ActionStatus::EmAndamento.toggled(), ActionStatus::Concluida);
        assert_eq!(ActionStatus::Concluida.toggled(), ActionStatus::EmAndamento);
    }

    #[test]
    fn test_action_plan_seed() {
        let actions = action_plan();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[0].status, ActionStatus::Concluida);
        assert_eq!(actions[1].status, ActionStatus::EmAndamento);
        assert_eq!(actions[2].status, ActionStatus::Pendente);
        assert_eq!(actions[3].responsible, "Ana Lima");
    }

    #[test]
    fn test_completed_count_follows_toggles() {
        let mut dash = DashboardState::new();
        assert_eq!(dash.completed_count(), 1);

        dash.selected_action = 2;
        dash.toggle_selected();
        assert_eq!(dash.completed_count(), 2);

        dash.selected_action = 0;
        dash.toggle_selected();
        assert_eq!(dash.actions[0].status, ActionStatus::EmAndamento);
        assert_eq!(dash.completed_count(), 1);
    }

    #[test]
    fn test_action_selection_is_clamped() {
        let mut dash = DashboardState::new();
        dash.select_prev_action();
        assert_eq!(dash.selected_action, 0);
        for _ in 0..10 {
            dash.select_next_action();
        }
        assert_eq!(dash.selected_action, dash.actions.len() - 1);
    }

    #[test]
    fn test_tab_cycle() {
        let mut dash = DashboardState::new();
        dash.next_tab();
        assert_eq!(dash.tab, DashboardTab::PlanoDeAcao);
        dash.next_tab();
        assert_eq!(dash.tab, DashboardTab::Diagnostico);
    }

    #[test]
    fn test_reset_view_keeps_action_statuses() {
        let mut dash = DashboardState::new();
        dash.next_tab();
        dash.selected_action = 3;
        dash.toggle_selected();

        dash.reset_view();
        assert_eq!(dash.tab, DashboardTab::Diagnostico);
        assert_eq!(dash.selected_action, 0);
        assert_eq!(dash.actions[3].status, ActionStatus::Concluida);
    }
}
